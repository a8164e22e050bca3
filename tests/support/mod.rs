// Shared bootstrapping for integration tests: a real server in front of a stub upstream.
use recipe_server::Config;
use std::collections::HashMap;

pub const TEST_API_KEY: &str = "test-api-key";

// Start the recipe server on an ephemeral port and return its base URL.
// The server task lives on the calling test's runtime and ends with it.
pub async fn spawn_server(upstream_url: &str) -> String {
    let vars = HashMap::from([
        ("SPOONACULAR_API_KEY", TEST_API_KEY.to_string()),
        ("SPOONACULAR_BASE_URL", upstream_url.to_string()),
        ("SPOONACULAR_TIMEOUT_MS", "2000".to_string()),
    ]);
    let config = Config::from_lookup(|key| vars.get(key).cloned()).expect("test config");

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    // The socket is already listening, so requests queue until the task starts accepting.
    tokio::spawn(async move {
        recipe_server::run(listener, config).await.expect("server failed");
    });

    format!("http://{addr}")
}
