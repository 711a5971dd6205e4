use crate::constants::{CONTENT_ID_ATTR, CONTENT_TEMPLATE_SELECTOR};
use crate::core::{ContentEntry, ContentRegistry};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the project table from the page's `<template data-modal-id>`
/// blocks. The first `h2` of each template supplies the typed title.
pub fn load_registry(document: &web::Document) -> ContentRegistry {
    let registry = ContentRegistry::from_entries(
        dom::elements_by_selector(document, CONTENT_TEMPLATE_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlTemplateElement>().ok())
            .filter_map(|tpl| {
                let id = tpl.get_attribute(CONTENT_ID_ATTR)?;
                Some((id, entry_from_template(&tpl)))
            }),
    );
    log::info!("[content] {} project entries", registry.len());
    registry
}

fn entry_from_template(tpl: &web::HtmlTemplateElement) -> ContentEntry {
    let title = tpl
        .content()
        .query_selector("h2")
        .ok()
        .flatten()
        .and_then(|h| h.text_content())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    ContentEntry {
        markup: tpl.inner_html(),
        title,
    }
}
