use super::{LiteralRule, RuleTable};

/// Deprecated application `.conf` keys and their current names.
///
/// Kept apart from the source table; the two are never merged.
pub const CONFIG_KEY_RULES: RuleTable = RuleTable::new("config-keys", &[
    LiteralRule::new("HttpCertFile", "HTTPSCertFile"),
    LiteralRule::new("HttpKeyFile", "HTTPSKeyFile"),
    LiteralRule::new("EnableHttpListen", "HTTPEnable"),
    LiteralRule::new("EnableHttpTLS", "EnableHTTPS"),
    LiteralRule::new("EnableHttpTLS", "EnableHTTPS"),
    LiteralRule::new("BeegoServerName", "ServerName"),
    LiteralRule::new("AdminHttpAddr", "AdminAddr"),
    LiteralRule::new("AdminHttpPort", "AdminPort"),
    LiteralRule::new("HttpServerTimeOut", "ServerTimeOut"),
]);
