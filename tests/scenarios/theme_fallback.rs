//! Design-context assets resolved through theme, module and library rules.

use assetry::{AssetReference, CachedLocation, DirectoryCode, FallbackContext};

use crate::common::*;

fn shop(file: &str) -> AssetReference {
    AssetReference::new(file, FallbackContext::new("frontend", SHOP_THEME, "en_US"))
}

#[test]
fn scenario_theme_less_is_compiled_with_module_and_variables() {
    let env = TestEnv::with_themes();
    env.write("app/design/frontend/Acme/shop/web/css/styles.less", STYLES_LESS);
    let service = env.service();

    let location = service.pre_process(&shop("css/styles.less")).unwrap().unwrap();

    let expected_path = "view_preprocessed/source/frontend/Acme/shop/en_US/css/styles.css";
    assert_eq!(location, CachedLocation::new(DirectoryCode::var(), expected_path));
    assert_eq!(
        env.read(&format!("var/{}", expected_path)),
        "@import '../Acme_Cart/css/cart.less';\n.a { color: #c00; }\n"
    );
}

#[test]
fn scenario_locale_override_wins_over_plain_theme_file() {
    let env = TestEnv::with_themes();
    env.write("app/design/frontend/Acme/shop/web/css/print.css", PLAIN_CSS);
    env.write(
        "app/design/frontend/Acme/shop/web/i18n/en_US/css/print.css",
        "body { direction: ltr; }\n",
    );
    let service = env.service();

    let source = service
        .find_relative_source_file_path(&shop("css/print.css"))
        .unwrap();

    assert_eq!(
        source.as_deref(),
        Some("app/design/frontend/Acme/shop/web/i18n/en_US/css/print.css")
    );
}

#[test]
fn scenario_ancestor_theme_supplies_missing_file() {
    let env = TestEnv::with_themes();
    env.write("app/design/frontend/Vendor/blank/web/css/print.css", PLAIN_CSS);
    let service = env.service();

    let file = service.get_file(&shop("css/print.css")).unwrap();

    assert_eq!(
        file,
        Some(env.path("app/design/frontend/Vendor/blank/web/css/print.css"))
    );
}

#[test]
fn scenario_module_file_from_module_view_dir() {
    let env = TestEnv::with_themes();
    env.write("app/code/Acme/Cart/view/frontend/web/css/cart.css", BRANDED_CSS);
    let service = env.service();
    let asset = shop("css/cart.css").with_module("Acme_Cart");

    let content = service.get_content(&asset).unwrap().unwrap();

    assert_eq!(content, b".b { color: #c00; }\n");
    assert_eq!(
        env.list_files("var/view_preprocessed"),
        vec!["source/frontend/Acme/shop/en_US/Acme_Cart/css/cart.css"]
    );
}

#[test]
fn scenario_theme_module_override_beats_module_default() {
    let env = TestEnv::with_themes();
    env.write("app/code/Acme/Cart/view/frontend/web/css/cart.css", BRANDED_CSS);
    env.write(
        "app/design/frontend/Acme/shop/Acme_Cart/web/css/cart.css",
        PLAIN_CSS,
    );
    let service = env.service();
    let asset = shop("css/cart.css").with_module("Acme_Cart");

    let source = service.find_relative_source_file_path(&asset).unwrap();

    assert_eq!(
        source.as_deref(),
        Some("app/design/frontend/Acme/shop/Acme_Cart/web/css/cart.css")
    );
}

#[test]
fn scenario_library_file_for_non_module_asset() {
    let env = TestEnv::with_themes();
    env.write("lib/web/jquery.js", JQUERY_JS);
    let service = env.service();

    let file = service.get_file(&shop("jquery.js")).unwrap();

    assert_eq!(file, Some(env.path("lib/web/jquery.js")));
}

#[test]
fn scenario_unknown_theme_still_reaches_library() {
    let env = TestEnv::with_themes();
    env.write("lib/web/jquery.js", JQUERY_JS);
    let service = env.service();
    let asset = AssetReference::new(
        "jquery.js",
        FallbackContext::new("frontend", "Nobody/none", "en_US"),
    );

    let file = service.get_file(&asset).unwrap();

    assert_eq!(file, Some(env.path("lib/web/jquery.js")));
}

#[test]
fn scenario_nothing_in_chain_is_not_found() {
    let env = TestEnv::with_themes();
    let service = env.service();

    assert!(service.get_file(&shop("css/missing.css")).unwrap().is_none());
    assert!(env.list_files("var").is_empty());
}
