use std::time::Duration;

/// Configuration surface shared by the server and lambda bindings.
pub trait ConfigProvider: Send + Sync {
    fn upstream_endpoint(&self) -> &str;

    /// BLS registration key; absence is tolerated and simply omitted upstream.
    fn api_key(&self) -> Option<&str>;

    /// When set, the key is additionally sent as an `Authorization: Bearer`
    /// header on top of the `registrationkey` body field.
    fn bearer_auth(&self) -> bool;

    fn upstream_timeout(&self) -> Duration;
}
