use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MediaCardListProps {
    pub uid_list: Vec<String>,
}

#[function_component(MediaCardList)]
pub fn media_card_list(props: &MediaCardListProps) -> Html {
    if props.uid_list.is_empty() {
        return html! { <p class="media-empty">{"No results"}</p> };
    }

    html! {
        <div class="media-card-list">
            { for props.uid_list.iter().map(|uid| html! {
                <div class="media-card" key={uid.clone()} data-uid={uid.clone()}>
                    <span class="media-uid">{uid}</span>
                </div>
            }) }
        </div>
    }
}
