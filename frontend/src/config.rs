//! 运行时配置
//!
//! 部署时可以不重新编译而改变后端地址，优先级：
//! 1. `<meta name="distro-admin:api-url">`（服务端注入）
//! 2. `window.__DISTRO_ADMIN_CONFIG__.api_url`（脚本注入）
//! 3. 编译期环境变量 `DISTRO_ADMIN_API_URL`，否则为默认地址

use distro_admin::ClientConfig;
use wasm_bindgen::JsCast;

const META_API_URL: &str = "distro-admin:api-url";
const JS_CONFIG_KEY: &str = "__DISTRO_ADMIN_CONFIG__";

pub fn load() -> ClientConfig {
    let injected = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|document| get_meta_content(&document, META_API_URL))
        .filter(|url| !url.trim().is_empty())
        .or_else(|| get_js_config("api_url").filter(|url| !url.trim().is_empty()));

    let config = match injected {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    log::info!("API base URL: {}", config.base_url());
    config
}

fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JS_CONFIG_KEY.into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    js_sys::Reflect::get(&config, &key.into()).ok()?.as_string()
}
