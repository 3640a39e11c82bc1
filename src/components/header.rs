use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::dom;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub section: Section,
    pub menu_open: bool,
    pub scrolled: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

fn contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref
        .get()
        .map(|n| n.contains(target))
        .unwrap_or(false)
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let panel_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Page scroll stays locked for as long as the panel is open
    use_effect_with(props.menu_open, |open| {
        dom::set_scroll_locked(*open);
        || dom::set_scroll_locked(false)
    });

    // Click-outside closes the panel. The toggle button is excluded so the
    // click that opened it (or toggles it shut) is not counted twice.
    {
        let panel_ref = panel_ref.clone();
        let toggle_ref = toggle_ref.clone();
        let on_close = props.on_close_menu.clone();
        use_effect_with(props.menu_open, move |open| {
            let mut listener: Option<EventListener> = None;

            if *open {
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    listener = Some(EventListener::new(&doc, "click", move |e| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let target = target.as_ref();
                        if !contains(&panel_ref, target) && !contains(&toggle_ref, target) {
                            on_close.emit(());
                        }
                    }));
                }
            }

            move || drop(listener)
        });
    }

    let nav_button = |s: Section| {
        let on_navigate = props.on_navigate.clone();
        let active = props.section == s;
        html! {
          <button
            key={s.key()}
            class={classes!("nav-link", active.then_some("active"))}
            aria-current={active.then_some("page")}
            onclick={Callback::from(move |_| on_navigate.emit(s))}
          >
            { s.label() }
          </button>
        }
    };

    let on_toggle = {
        let cb = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_close = {
        let cb = props.on_close_menu.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
      <header class={classes!("site-header", props.scrolled.then_some("scrolled"))}>
        <div class="container header-row">
          <div class="brand">
            <span class="brand-mark" aria-hidden="true">{ "🌐" }</span>
            <span class="brand-name">{ props.title.clone() }</span>
          </div>

          <nav class="nav-desktop" aria-label="Sections">
            { for Section::all().into_iter().map(nav_button) }
          </nav>

          <button
            ref={toggle_ref}
            class="menu-toggle"
            aria-label="Toggle menu"
            aria-expanded={props.menu_open.to_string()}
            onclick={on_toggle}
          >
            { if props.menu_open { "✕" } else { "☰" } }
          </button>
        </div>

        if props.menu_open {
          <>
          <div class="menu-backdrop" aria-hidden="true"></div>
          <div ref={panel_ref} class="menu-panel" role="dialog" aria-label="Menu">
            <div class="menu-panel-head">
              <span class="brand-name">{ props.title.clone() }</span>
              <button class="menu-close" aria-label="Close menu" onclick={on_close}>{ "✕" }</button>
            </div>
            <nav class="nav-mobile" aria-label="Sections">
              { for Section::all().into_iter().map(nav_button) }
            </nav>
          </div>
          </>
        }
      </header>
    }
}
