use yew::prelude::*;

use crate::config::CarouselConfig;
use crate::dom::{self, BoundCarousel, Listener};
use crate::model::GridKind;
use crate::state::{Direction, ScrollEdges};

#[derive(Properties, PartialEq, Clone)]
pub struct DragCarouselProps {
    pub kind: GridKind,
    pub config: CarouselConfig,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DragCarousel)]
pub fn drag_carousel(props: &DragCarouselProps) -> Html {
    let grid_ref = use_node_ref();
    let bound = use_mut_ref(|| None::<BoundCarousel>);
    let edges = use_state(ScrollEdges::default);

    // Bind on mount (and whenever the config changes); dropping the binding
    // detaches its listeners.
    {
        let grid_ref = grid_ref.clone();
        let bound = bound.clone();
        let edges = edges.clone();
        let kind = props.kind;
        use_effect_with(props.config, move |config| {
            let grid = dom::grid_element(&grid_ref, kind.grid_class())
                .map_err(|e| log::debug!("{e}"))
                .ok();
            let carousel = dom::bind(grid, *config);
            if let Some(c) = &carousel {
                edges.set(c.edges());
            }
            *bound.borrow_mut() = carousel;

            let resize = web_sys::window().and_then(|win| {
                let bound = bound.clone();
                let edges = edges.clone();
                Listener::new(&win, "resize", true, move |_: Event| {
                    if let Some(c) = &*bound.borrow() {
                        edges.set(c.edges());
                    }
                })
                .map_err(|e| log::warn!("resize listener: {e}"))
                .ok()
            });

            move || {
                drop(resize);
                bound.borrow_mut().take();
            }
        });
    }

    let onscroll = {
        let bound = bound.clone();
        let edges = edges.clone();
        Callback::from(move |_: Event| {
            if let Some(c) = &*bound.borrow() {
                let now = c.edges();
                if now != *edges {
                    edges.set(now);
                }
            }
        })
    };
    let step = |dir: Direction| {
        let bound = bound.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(c) = &*bound.borrow() {
                c.step(dir);
            }
        })
    };

    html! {<div class={classes!(props.kind.container_class(), "carousel-container")}>
        <button class="scroll-btn left" style={format!("opacity:{}", edges.opacity(Direction::Left))} onclick={step(Direction::Left)}>
            <i class="fas fa-chevron-left"></i>
        </button>
        <div ref={grid_ref} class={props.kind.grid_class()} onscroll={onscroll}>
            { for props.children.iter() }
        </div>
        <button class="scroll-btn right" style={format!("opacity:{}", edges.opacity(Direction::Right))} onclick={step(Direction::Right)}>
            <i class="fas fa-chevron-right"></i>
        </button>
    </div>}
}
