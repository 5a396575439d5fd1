use super::{drag_carousel::DragCarousel, item_card::ItemCard};
use crate::model::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionViewProps {
    pub section: Section,
}

#[function_component(SectionView)]
pub fn section_view(props: &SectionViewProps) -> Html {
    let s = &props.section;
    let kind = s.kind;
    html! {<section id={s.id.clone()} class="carousel-section">
        <div class="section-container">
            <h2 class="section-title">{ s.title.clone() }</h2>
            { if let Some(sub) = &s.subtitle { html!{ <p class="section-subtitle">{ sub.clone() }</p> } } else { html!{} } }
            <DragCarousel kind={kind} config={s.config()}>
                { for s.items.iter().map(|item| html!{ <ItemCard kind={kind} item={item.clone()} /> }) }
            </DragCarousel>
        </div>
    </section>}
}
