use super::section_view::SectionView;
use crate::model::SiteContent;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| match SiteContent::bundled() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            SiteContent::default()
        }
    });

    html! {<main class="site">
        { for content.sections.iter().map(|s| html!{ <SectionView key={s.id.clone()} section={s.clone()} /> }) }
    </main>}
}
