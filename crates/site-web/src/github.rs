use crate::constants::{GITHUB_REPO_LIMIT, GITHUB_USER, PROJECTS_ERROR_HTML, PROJECTS_GRID_ID, PROJECT_CARD_SELECTOR};
use crate::dom;
use crate::reveal::RevealController;
use site_core::escape_html;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn repos_url() -> String {
    format!(
        "https://api.github.com/users/{GITHUB_USER}/repos?sort=updated&per_page={GITHUB_REPO_LIMIT}"
    )
}

/// Fetches the most recently updated public repos and renders them into the
/// project grid. Runs on the event loop without touching any animation loop;
/// the new cards are handed to the reveal controller like any other element.
pub async fn load_projects(document: web::Document, reveal: RevealController) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let grid = document
        .get_element_by_id(PROJECTS_GRID_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PROJECTS_GRID_ID}"))?;

    let init = web::RequestInit::new();
    init.set_cache(web::RequestCache::ForceCache);
    let request = web::Request::new_with_str_and_init(&repos_url(), &init).map_err(js_err)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch did not yield a Response"))?;
    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    // an error body is an object with a "message" field, not an array
    let repos: js_sys::Array = json
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected response shape"))?;

    let mut html = String::new();
    for repo in repos.iter() {
        html.push_str(&render_card(&repo));
    }
    grid.set_inner_html(&html);
    log::info!("[github] rendered {} project cards", repos.length());

    for el in dom::query_all(&document, PROJECT_CARD_SELECTOR) {
        reveal.observe(&el);
    }
    Ok(())
}

pub fn show_load_error(document: &web::Document) {
    if let Some(grid) = document.get_element_by_id(PROJECTS_GRID_ID) {
        grid.set_inner_html(PROJECTS_ERROR_HTML);
    }
}

fn render_card(repo: &JsValue) -> String {
    let name = escape_html(&str_field(repo, "name").unwrap_or_default());
    let description = escape_html(
        &str_field(repo, "description").unwrap_or_else(|| "No description yet.".to_string()),
    );
    let stars = num_field(repo, "stargazers_count").unwrap_or(0.0) as u64;
    let forks = num_field(repo, "forks_count").unwrap_or(0.0) as u64;
    let url = escape_html(&str_field(repo, "html_url").unwrap_or_default());
    let tags = match str_field(repo, "language") {
        Some(lang) => format!(
            "<div class=\"project-tags\"><span class=\"tag\">{}</span></div>",
            escape_html(&lang)
        ),
        None => String::new(),
    };
    format!(
        "<div class=\"project-card reveal-element\">\
            <div class=\"project-header\">\
                <div class=\"project-icon\">📦</div>\
                <div class=\"project-stats\">\
                    <span class=\"stat-item\">⭐ {stars}</span>\
                    <span class=\"stat-item\">🔀 {forks}</span>\
                </div>\
            </div>\
            <h3>{name}</h3>\
            <p>{description}</p>\
            {tags}\
            <a href=\"{url}\" class=\"project-link\" target=\"_blank\">View project</a>\
        </div>"
    )
}

fn str_field(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn num_field(obj: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}
