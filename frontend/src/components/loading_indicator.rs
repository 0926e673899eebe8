use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(status: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "color:black; font-size: 26px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
            "{status}"
        }
    }
}
