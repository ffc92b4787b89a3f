use serde::{Deserialize, Serialize};

/// Error correction level of a rendered QR code, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrErrorCorrection {
    L,
    M,
    Q,
    H,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    pub level: QrErrorCorrection,
    pub quiet_zone: bool,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            level: QrErrorCorrection::Q,
            quiet_zone: true,
        }
    }
}
