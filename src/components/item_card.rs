use crate::model::{GridKind, Item};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemCardProps {
    pub kind: GridKind,
    pub item: Item,
}

#[function_component]
pub fn ItemCard(props: &ItemCardProps) -> Html {
    let item = &props.item;
    html! {<div class={props.kind.item_class()}>
        { if let Some(src) = &item.image { html!{ <img src={src.clone()} alt={item.title.clone()} loading="lazy" draggable="false" /> } } else { html!{} } }
        <h3>{ item.title.clone() }</h3>
        { if let Some(s) = &item.subtitle { html!{ <p class="subtitle">{ s.clone() }</p> } } else { html!{} } }
        { if let Some(b) = &item.body { html!{ <p class="body">{ b.clone() }</p> } } else { html!{} } }
    </div>}
}
