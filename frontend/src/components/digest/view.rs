//! Rendering for the digest generator: the action bar, the error banner,
//! the metadata panel and the rendered markdown body.

use chrono::{Local, Utc};
use common::model::digest::Digest;
use yew::html::Scope;
use yew::prelude::*;

use crate::markdown::render_markdown;

use super::messages::Msg;
use super::state::DigestGenerator;

pub const GENERATE_LABEL: &str = "Generate Daily Digest";
pub const GENERATING_LABEL: &str = "Generating...";
pub const DOWNLOAD_LABEL: &str = "Download Markdown";

/// State of the action bar.
#[derive(Debug, PartialEq, Eq)]
pub struct Controls {
    pub label: &'static str,
    pub generate_disabled: bool,
    pub can_download: bool,
}

/// Display fields of a received digest.
#[derive(Debug, PartialEq)]
pub struct DigestPanel {
    pub generated_at: String,
    pub stories: String,
    pub min_score: String,
    pub body_html: String,
}

pub fn controls(component: &DigestGenerator) -> Controls {
    let loading = component.request.is_loading();
    Controls {
        label: if loading { GENERATING_LABEL } else { GENERATE_LABEL },
        generate_disabled: loading,
        can_download: component.digest().is_some(),
    }
}

pub fn panel(digest: &Digest) -> DigestPanel {
    DigestPanel {
        generated_at: format!(
            "Generated at: {}",
            digest
                .generated_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        ),
        stories: format!("Stories: {}", digest.story_count),
        min_score: format!("Min Score: {}", digest.min_score),
        body_html: render_markdown(&digest.content),
    }
}

pub fn view(component: &DigestGenerator, ctx: &Context<DigestGenerator>) -> Html {
    let link = ctx.link();

    html! {
        <section class="digest-section">
            { build_action_bar(component, link) }
            { build_error_banner(component) }
            {
                match component.digest() {
                    Some(digest) => build_digest(digest),
                    None => html! {},
                }
            }
            {
                if component.request.is_loading() {
                    html! {
                        <div class="loading">
                            <div class="spinner" />
                            <p>{ "Generating digest..." }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn build_action_bar(component: &DigestGenerator, link: &Scope<DigestGenerator>) -> Html {
    let controls = controls(component);
    html! {
        <div class="digest-actions">
            <button
                class="btn btn-blue"
                disabled={controls.generate_disabled}
                onclick={link.callback(|_| Msg::Generate)}
            >
                { controls.label }
            </button>
            {
                if controls.can_download {
                    html! {
                        <button
                            class="btn btn-green"
                            onclick={link.callback(|_| Msg::Download(Utc::now().date_naive()))}
                        >
                            { DOWNLOAD_LABEL }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_error_banner(component: &DigestGenerator) -> Html {
    match component.request.error() {
        Some(message) => html! {
            <div class="alert alert-error" role="alert">
                <strong class="alert-title">{ "Error!" }</strong>
                <span class="alert-description">{ message.to_string() }</span>
            </div>
        },
        None => html! {},
    }
}

fn build_digest(digest: &Digest) -> Html {
    let panel = panel(digest);
    html! {
        <div class="digest">
            <div class="digest-meta">
                <p>{ panel.generated_at }</p>
                <div class="badges">
                    <span class="badge badge-purple">{ panel.stories }</span>
                    <span class="badge badge-green">{ panel.min_score }</span>
                </div>
            </div>
            <div class="markdown-content">
                { Html::from_html_unchecked(AttrValue::from(panel.body_html)) }
            </div>
        </div>
    }
}
