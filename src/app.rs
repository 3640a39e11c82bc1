use gloo::events::EventListener;
use yew::prelude::*;

use crate::components::{
    AboutSection, Footer, Header, HomeSection, RegisterSection, RegistrationTimer, SpeakersSection,
};
use crate::config::SiteConfig;
use crate::dom;
use crate::state::{Notice, Section, SiteAction, SiteState};

/// Scroll offset (px) after which the header switches to its compact style.
const STICKY_THRESHOLD_PX: f64 = 10.0;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::load());
    let state = use_reducer(SiteState::default);

    // Sticky header: track whether the page has scrolled past the threshold
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "scroll", move |_| {
                    dispatcher.dispatch(SiteAction::Scrolled(dom::scroll_y() > STICKY_THRESHOLD_PX));
                })
            });
            move || drop(listener)
        });
    }

    // Successful registration: acknowledge with a browser alert
    use_effect_with(state.notice.clone(), |notice| {
        if let Some(Notice::Registered { name, ticket }) = notice {
            gloo::console::log!(format!("registration accepted ({})", ticket.key()));
            dom::alert(&format!(
                "Thank you for registering, {name}! A confirmation for your {} will follow by email.",
                ticket.label()
            ));
        }
        || ()
    });

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: SiteAction| {
            if action == SiteAction::Submit {
                gloo::console::log!("registration submitted");
            }
            dispatcher.dispatch(action)
        })
    };

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            gloo::console::log!(format!("section -> {}", section.key()));
            dispatcher.dispatch(SiteAction::Navigate(section));
            dom::scroll_to_top();
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SiteAction::ToggleMenu))
    };

    let on_close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SiteAction::CloseMenu))
    };

    let on_register = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(Section::Register))
    };

    let content = match state.section {
        Section::Home => html! { <HomeSection config={config.clone()} {on_register} /> },
        Section::About => html! { <AboutSection /> },
        Section::Speakers => html! { <SpeakersSection /> },
        Section::Register => html! {
            <RegisterSection
              form={state.form.clone()}
              notice={state.notice.clone()}
              {dispatch}
            />
        },
    };

    html! {
      <div class="page">
        <Header
          title={config.name.clone()}
          section={state.section}
          menu_open={state.menu_open}
          scrolled={state.scrolled}
          {on_navigate}
          {on_toggle_menu}
          {on_close_menu}
        />

        <main class="main">{ content }</main>

        <Footer
          contact_email={config.contact_email.clone()}
          city={config.city.clone()}
        />

        <RegistrationTimer end_date={config.countdown_end.clone()} />
      </div>
    }
}
