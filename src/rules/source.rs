use super::{LiteralRule, RuleTable};

const fn rule(old: &'static str, new: &'static str) -> LiteralRule {
    LiteralRule::new(old, new)
}

/// Framework 1.6 API renames for application source and templates
pub const SOURCE_RULES: RuleTable = RuleTable::new("source", &[
    // Globals moved under BConfig
    rule("beego.AppName", "beego.BConfig.AppName"),
    rule("beego.RunMode", "beego.BConfig.RunMode"),
    rule("beego.RecoverPanic", "beego.BConfig.RecoverPanic"),
    rule("beego.RouterCaseSensitive", "beego.BConfig.RouterCaseSensitive"),
    rule("beego.BeegoServerName", "beego.BConfig.ServerName"),
    rule("beego.EnableGzip", "beego.BConfig.EnableGzip"),
    rule("beego.ErrorsShow", "beego.BConfig.EnableErrorsShow"),
    rule("beego.CopyRequestBody", "beego.BConfig.CopyRequestBody"),
    rule("beego.MaxMemory", "beego.BConfig.MaxMemory"),
    rule("beego.Graceful", "beego.BConfig.Listen.Graceful"),
    rule("beego.HttpAddr", "beego.BConfig.Listen.HTTPAddr"),
    rule("beego.HttpPort", "beego.BConfig.Listen.HTTPPort"),
    rule("beego.ListenTCP4", "beego.BConfig.Listen.ListenTCP4"),
    rule("beego.EnableHttpListen", "beego.BConfig.Listen.EnableHTTP"),
    rule("beego.EnableHttpTLS", "beego.BConfig.Listen.EnableHTTPS"),
    rule("beego.HttpsAddr", "beego.BConfig.Listen.HTTPSAddr"),
    rule("beego.HttpsPort", "beego.BConfig.Listen.HTTPSPort"),
    rule("beego.HttpCertFile", "beego.BConfig.Listen.HTTPSCertFile"),
    rule("beego.HttpKeyFile", "beego.BConfig.Listen.HTTPSKeyFile"),
    rule("beego.EnableAdmin", "beego.BConfig.Listen.EnableAdmin"),
    rule("beego.AdminHttpAddr", "beego.BConfig.Listen.AdminAddr"),
    rule("beego.AdminHttpPort", "beego.BConfig.Listen.AdminPort"),
    rule("beego.UseFcgi", "beego.BConfig.Listen.EnableFcgi"),
    rule("beego.HttpServerTimeOut", "beego.BConfig.Listen.ServerTimeOut"),
    rule("beego.AutoRender", "beego.BConfig.WebConfig.AutoRender"),
    rule("beego.ViewsPath", "beego.BConfig.WebConfig.ViewsPath"),
    rule("beego.StaticDir", "beego.BConfig.WebConfig.StaticDir"),
    rule("beego.StaticExtensionsToGzip", "beego.BConfig.WebConfig.StaticExtensionsToGzip"),
    rule("beego.DirectoryIndex", "beego.BConfig.WebConfig.DirectoryIndex"),
    rule("beego.FlashName", "beego.BConfig.WebConfig.FlashName"),
    rule("beego.FlashSeperator", "beego.BConfig.WebConfig.FlashSeparator"),
    rule("beego.EnableDocs", "beego.BConfig.WebConfig.EnableDocs"),
    rule("beego.XSRFKEY", "beego.BConfig.WebConfig.XSRFKey"),
    rule("beego.EnableXSRF", "beego.BConfig.WebConfig.EnableXSRF"),
    rule("beego.XSRFExpire", "beego.BConfig.WebConfig.XSRFExpire"),
    rule("beego.TemplateLeft", "beego.BConfig.WebConfig.TemplateLeft"),
    rule("beego.TemplateRight", "beego.BConfig.WebConfig.TemplateRight"),
    rule("beego.SessionOn", "beego.BConfig.WebConfig.Session.SessionOn"),
    rule("beego.SessionProvider", "beego.BConfig.WebConfig.Session.SessionProvider"),
    rule("beego.SessionName", "beego.BConfig.WebConfig.Session.SessionName"),
    rule("beego.SessionGCMaxLifetime", "beego.BConfig.WebConfig.Session.SessionGCMaxLifetime"),
    rule("beego.SessionSavePath", "beego.BConfig.WebConfig.Session.SessionProviderConfig"),
    rule("beego.SessionCookieLifeTime", "beego.BConfig.WebConfig.Session.SessionCookieLifeTime"),
    rule("beego.SessionAutoSetCookie", "beego.BConfig.WebConfig.Session.SessionAutoSetCookie"),
    rule("beego.SessionDomain", "beego.BConfig.WebConfig.Session.SessionDomain"),
    // CopyBody now takes the memory limit
    rule("Ctx.Input.CopyBody()", "Ctx.Input.CopyBody(beego.BConfig.MaxMemory)"),
    // Initialisms
    rule(".UrlFor(", ".URLFor("),
    rule(".ServeJson(", ".ServeJSON("),
    rule(".ServeXml(", ".ServeXML("),
    rule(".ServeJsonp(", ".ServeJSONP("),
    rule(".XsrfToken(", ".XSRFToken("),
    rule(".CheckXsrfCookie(", ".CheckXSRFCookie("),
    rule(".XsrfFormHtml(", ".XSRFFormHTML("),
    rule("beego.UrlFor(", "beego.URLFor("),
    rule("beego.GlobalDocApi", "beego.GlobalDocAPI"),
    rule("beego.Errorhandler", "beego.ErrorHandler"),
    rule("Output.Jsonp(", "Output.JSONP("),
    rule("Output.Json(", "Output.JSON("),
    rule("Output.Xml(", "Output.XML("),
    rule("Input.Uri()", "Input.URI()"),
    rule("Input.Url()", "Input.URL()"),
    rule("Input.AcceptsHtml()", "Input.AcceptsHTML()"),
    rule("Input.AcceptsXml()", "Input.AcceptsXML()"),
    rule("Input.AcceptsJson()", "Input.AcceptsJSON()"),
    rule("Ctx.XsrfToken()", "Ctx.XSRFToken()"),
    rule("Ctx.CheckXsrfCookie()", "Ctx.CheckXSRFCookie()"),
    rule("session.SessionStore", "session.Store"),
    rule(".TplNames", ".TplName"),
    // ApiRef and ApiDeclaration must stay ahead of the bare Api prefix
    rule("swagger.ApiRef", "swagger.APIRef"),
    rule("swagger.ApiDeclaration", "swagger.APIDeclaration"),
    rule("swagger.Api", "swagger.API"),
    rule("swagger.ApiRef", "swagger.APIRef"),
    rule("swagger.Infomation", "swagger.Information"),
    rule("toolbox.UrlMap", "toolbox.URLMap"),
    rule("logs.LoggerInterface", "logs.Logger"),
    rule("Input.Request", "Input.Context.Request"),
    rule("Input.Params)", "Input.Params())"),
    rule("httplib.BeegoHttpSettings", "httplib.BeegoHTTPSettings"),
    rule("httplib.BeegoHttpRequest", "httplib.BeegoHTTPRequest"),
    rule(".TlsClientConfig", ".TLSClientConfig"),
    rule(".JsonBody", ".JSONBody"),
    rule(".ToJson", ".ToJSON"),
    rule(".ToXml", ".ToXML"),
    rule("beego.Html2str", "beego.HTML2str"),
    rule("beego.AssetsCss", "beego.AssetsCSS"),
    // orm constants
    rule("orm.DR_Sqlite", "orm.DRSqlite"),
    rule("orm.DR_Postgres", "orm.DRPostgres"),
    rule("orm.DR_MySQL", "orm.DRMySQL"),
    rule("orm.DR_Oracle", "orm.DROracle"),
    rule("orm.Col_Add", "orm.ColAdd"),
    rule("orm.Col_Minus", "orm.ColMinus"),
    rule("orm.Col_Multiply", "orm.ColMultiply"),
    rule("orm.Col_Except", "orm.ColExcept"),
    rule("GenerateOperatorSql", "GenerateOperatorSQL"),
    rule("OperatorSql", "OperatorSQL"),
    rule("orm.Debug_Queries", "orm.DebugQueries"),
    rule("orm.COMMA_SPACE", "orm.CommaSpace"),
    rule(".SendOut()", ".DoRequest()"),
    rule("validation.ValidationError", "validation.Error"),
]);

/// Corrections for over-eager matches of [`SOURCE_RULES`].
///
/// `Input.Request` -> `Input.Context.Request` also hits the `RequestBody`
/// field, which did not move.
pub const SOURCE_FOLLOW_UP_RULES: RuleTable = RuleTable::new(
    "source-follow-up",
    &[rule("Input.Context.RequestBody", "Input.RequestBody")],
);

/// Generated swagger documentation (`docs.go`)
pub const DOCS_RULES: RuleTable = RuleTable::new("docs", &[rule("v.Apis", "v.APIs")]);
