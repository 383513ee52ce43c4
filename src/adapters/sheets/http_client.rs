use google_sheets4::{hyper, hyper_rustls};

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Fails when the platform's root certificates cannot be loaded.
pub fn http_client() -> std::io::Result<hyper::Client<HttpsConnector>> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();
    Ok(hyper::Client::builder().build(connector))
}
