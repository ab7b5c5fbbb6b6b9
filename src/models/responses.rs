use serde::{Deserialize, Serialize};

// Field order fixes the JSON key order of the serialized body.
#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub path: String,
}
