//! End-to-end tests of the fix pipeline over a small application tree

use fixup::report::FileStatus;
use fixup::walker::fix_tree;
use fixup::{FileTransformer, FixConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ROUTER: &str = r#"package routers

import (
	"github.com/astaxie/beego"
	"github.com/astaxie/beego/cache"
)

var bm cache.Cache

func Lookup(c *beego.Controller) {
	name := c.Ctx.Input.Params[":name"]
	bm.Put(name, 1, 3600)
	bm.Put("visits", counter, 86400)
	c.Ctx.Input.Data["name"] = name
	c.Data["json"] = c.Ctx.Input.Data["name"]
	c.ServeJson()
}
"#;

const ROUTER_FIXED: &str = r#"package routers

import (
	"time"
	"github.com/astaxie/beego"
	"github.com/astaxie/beego/cache"
)

var bm cache.Cache

func Lookup(c *beego.Controller) {
	name := c.Ctx.Input.Param(":name")
	bm.Put(name, 1, 3600)
	bm.Put("visits", counter, 86400*time.Second)
	c.Ctx.Input.SetData("name", name)
	c.Data["json"] = c.Ctx.Input.Data("name")
	c.ServeJSON()
}
"#;

const APP_CONF: &str = "appname = demo\nhttpport = 8080\nEnableHttpTLS = true\nHttpCertFile = conf/server.crt\nHttpKeyFile = conf/server.key\nBeegoServerName = demo\n";

const APP_CONF_FIXED: &str = "appname = demo\nhttpport = 8080\nEnableHTTPS = true\nHTTPSCertFile = conf/server.crt\nHTTPSKeyFile = conf/server.key\nServerName = demo\n";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn setup_app() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "routers/router.go", ROUTER);
    write(root, "conf/app.conf", APP_CONF);
    write(
        root,
        "docs/docs.go",
        "package docs\n\nfunc init() {\n\tv.Apis = append(v.Apis, api)\n}\n",
    );
    write(root, "views/index.tpl", "<p>{{.Website}}</p>\n");
    write(root, ".git/HEAD", "ref: refs/heads/beego.AppName\n");
    dir
}

#[test]
fn test_fix_application_tree() {
    let dir = setup_app();
    let root = dir.path();

    let transformer = FileTransformer::new(FixConfig::default());
    let report = fix_tree(root, &transformer, |_| {});

    assert_eq!(report.failed(), 0);
    assert_eq!(report.rewritten(), 3);
    assert_eq!(report.unchanged(), 1);

    assert_eq!(read(root, "routers/router.go"), ROUTER_FIXED);
    assert_eq!(read(root, "conf/app.conf"), APP_CONF_FIXED);
    assert!(read(root, "docs/docs.go").contains("v.APIs = append(v.APIs, api)"));
    assert_eq!(read(root, "views/index.tpl"), "<p>{{.Website}}</p>\n");
    assert_eq!(read(root, ".git/HEAD"), "ref: refs/heads/beego.AppName\n");
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = setup_app();
    let root = dir.path();
    let transformer = FileTransformer::new(FixConfig::default());

    fix_tree(root, &transformer, |_| {});
    let second = fix_tree(root, &transformer, |_| {});

    assert_eq!(second.rewritten(), 0);
    assert!(second
        .outcomes
        .iter()
        .all(|o| o.status == FileStatus::Unchanged));
    assert_eq!(read(root, "routers/router.go"), ROUTER_FIXED);
    assert_eq!(read(root, "routers/router.go").matches("\"time\"").count(), 1);
}

#[test]
fn test_report_records_passes() {
    let dir = setup_app();
    let root = dir.path();

    let transformer = FileTransformer::new(FixConfig::default()).dry_run(true);
    let report = fix_tree(root, &transformer, |_| {});

    let router = report
        .outcomes
        .iter()
        .find(|o| o.path.ends_with("routers/router.go"))
        .unwrap();
    assert!(router.import_added);
    assert_eq!(router.passes.len(), 4);
    assert_eq!(read(root, "routers/router.go"), ROUTER);
}

#[test]
fn test_one_bad_file_does_not_stop_others() {
    let dir = setup_app();
    let root = dir.path();
    write(root, "models/broken.go", "/* unterminated\nbm.Put(\"k\", v, 5)\n");

    let transformer = FileTransformer::new(FixConfig::default());
    let report = fix_tree(root, &transformer, |_| {});

    assert_eq!(report.failed(), 1);
    let failure = report.failures().next().unwrap();
    assert!(failure.path.ends_with("models/broken.go"));
    assert_eq!(read(root, "routers/router.go"), ROUTER_FIXED);
    assert_eq!(
        read(root, "models/broken.go"),
        "/* unterminated\nbm.Put(\"k\", v, 5)\n"
    );
}
