use crate::management::access_gate::AccessGate;

pub mod management;
pub mod utils;

const USER_NAME: &str = "@ligia.mx";

#[tokio::main]
async fn main() {
    let gate = AccessGate::instance();
    gate.check_access(USER_NAME).await;
}
