//! Application endpoint request and response bodies.

use serde::{Deserialize, Serialize};

use jp_core::domain::entities::application::{Application, ApplicationStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationRequest {
    pub status: Option<ApplicationStatus>,
    pub progress: Option<u8>,
    pub notes: Option<String>,
}

/// Response body carrying an application and a confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub message: String,
    pub application: Application,
}
