use rand::RngCore;

use app_api::AppContext;

#[derive(Clone)]
pub struct HttpState {
    pub context: AppContext,
    pub admin_token: String,
}

impl HttpState {
    pub fn new(context: AppContext, admin_token: String) -> Self {
        Self {
            context,
            admin_token,
        }
    }
}

/// Random token for the admin surface when none is configured.
pub fn generate_admin_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
