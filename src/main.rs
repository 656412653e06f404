#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use codeterminal_site::server::{init_tracing, serve};

    init_tracing();
    if let Err(e) = serve().await {
        tracing::error!(error = ?e, "{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
