//! Rendering for the news list.
//!
//! `body` reduces the request state to a `NewsListBody` view model; `view`
//! turns that into markup. Keeping the first step free of Yew types lets the
//! card count, order and formatting be checked without a DOM.

use common::model::news_item::NewsItem;
use yew::prelude::*;

use crate::markdown::is_safe_url;
use crate::request_state::RequestState;

use super::state::NewsListView;

pub const EMPTY_TEXT: &str = "No news articles found";
pub const LOADING_TEXT: &str = "Loading news...";

/// What the list region shows for a given request state.
#[derive(Debug, PartialEq)]
pub enum NewsListBody<'a> {
    Loading,
    Empty,
    Failed(&'a str),
    Cards(Vec<NewsCard<'a>>),
}

/// Display fields of one article card.
#[derive(Debug, PartialEq)]
pub struct NewsCard<'a> {
    pub title: &'a str,
    pub href: &'a str,
    pub description: &'a str,
    pub source: &'a str,
    pub score: String,
}

impl<'a> From<&'a NewsItem> for NewsCard<'a> {
    fn from(item: &'a NewsItem) -> Self {
        Self {
            title: &item.title,
            href: if is_safe_url(&item.url) { item.url.as_str() } else { "" },
            description: &item.description,
            source: &item.source,
            score: item.formatted_score(),
        }
    }
}

pub fn body(request: &RequestState<Vec<NewsItem>>) -> NewsListBody<'_> {
    match request {
        RequestState::Idle | RequestState::Loading => NewsListBody::Loading,
        RequestState::Error(message) => NewsListBody::Failed(message),
        RequestState::Success(items) if items.is_empty() => NewsListBody::Empty,
        RequestState::Success(items) => {
            NewsListBody::Cards(items.iter().map(NewsCard::from).collect())
        }
    }
}

pub fn view(component: &NewsListView, _ctx: &Context<NewsListView>) -> Html {
    let content = match body(&component.request) {
        NewsListBody::Loading => html! {
            <div class="loading">
                <div class="spinner" />
                <p>{ LOADING_TEXT }</p>
            </div>
        },
        NewsListBody::Failed(message) => html! {
            <div class="alert alert-error" role="alert">
                <strong class="alert-title">{ "Error!" }</strong>
                <span class="alert-description">{ message.to_string() }</span>
            </div>
        },
        NewsListBody::Empty => html! {
            <div class="alert alert-info">{ EMPTY_TEXT }</div>
        },
        NewsListBody::Cards(cards) => html! {
            <div class="news-list">
                { for cards.iter().enumerate().map(|(index, card)| news_card(index, card)) }
            </div>
        },
    };

    html! { <section class="news-section">{ content }</section> }
}

fn news_card(index: usize, card: &NewsCard<'_>) -> Html {
    html! {
        <article key={index} class="news-card">
            <h3 class="news-title">
                <a href={card.href.to_string()} target="_blank" rel="noopener noreferrer">
                    { card.title.to_string() }
                </a>
            </h3>
            <p class="news-description">{ card.description.to_string() }</p>
            <div class="badges">
                <span class="badge badge-purple">{ card.source.to_string() }</span>
                <span class="badge badge-green">{ format!("Score: {}", card.score) }</span>
            </div>
        </article>
    }
}
