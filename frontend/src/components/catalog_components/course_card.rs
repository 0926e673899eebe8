//! Course card component.

use dioxus::prelude::*;
use engine::view::CourseCard;

#[component]
pub fn CourseCardItem(card: ReadSignal<CourseCard>) -> Element {
    let CourseCard { code, title, department, level, credits, description } = card.read().clone();
    rsx! {
        article {
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                box-sizing: border-box;
            ",
            // Row 1: CODE - TITLE
            div {
                style: "display: flex; flex-direction: row; align-items: baseline; gap: 12px;",
                span {
                    style: "font-size: 16px; font-weight: 500; color: rgba(0, 0, 0, 0.6);",
                    "{code}"
                }
                h2 {
                    style: "font-size: 20px; font-weight: 400; margin: 0; color: #111827;",
                    "{title}"
                }
            }
            // Row 2: DEPARTMENT - LEVEL - CREDITS
            div {
                style: "display: flex; flex-direction: row; gap: 16px; font-size: 14px; color: rgb(75, 87, 112);",
                span { "{department}" }
                span { "Level {level}" }
                span { "{credits} credits" }
            }
            p {
                style: "font-size: 15px; margin: 0; color: rgba(28, 33, 45, 0.8);",
                "{description}"
            }
        }
    }
}
