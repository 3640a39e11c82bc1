use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{ABOUT, HIGHLIGHTS, OBJECTIVES, SPEAKERS};
use crate::form::{Field, FormState, TicketType};
use crate::state::{Notice, SiteAction};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
    pub on_register: Callback<()>,
}

#[function_component(HomeSection)]
pub fn home_section(props: &HomeProps) -> Html {
    let cfg = &props.config;
    let on_register = {
        let cb = props.on_register.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
      <section id="home" class="container section">
        <div class="hero">
          <div>
            <h1 class="hero-title">{ cfg.title() }</h1>
            <p class="hero-tagline">{ cfg.tagline.clone() }</p>
            <div class="facts">
              <div class="fact">
                <span class="accent-blue" aria-hidden="true">{ "📅" }</span>
                <span class="fact-strong">{ cfg.dates.clone() }</span>
              </div>
              <div class="fact">
                <span class="accent-green" aria-hidden="true">{ "📍" }</span>
                <span>{ cfg.venue.clone() }</span>
              </div>
            </div>
            <div class="btn-row">
              <button class="btn" onclick={on_register}>{ "Register Now ✓" }</button>
              <button class="btn btn-ghost">{ "Download Brochure 💼" }</button>
            </div>
          </div>
          <div>
            <img class="hero-img" src="/api/placeholder/600/400" alt="Conference Venue" />
          </div>
        </div>
      </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
      <section id="about" class="container section">
        <h2 class="section-title">{ "About the Conference" }</h2>
        <div class="two-col">
          <div>
            <p class="lead">{ ABOUT }</p>
            <div class="panel">
              <h3>{ "Key Objectives" }</h3>
              <ul class="objectives">
                { for OBJECTIVES.iter().map(|(icon, accent, text)| html! {
                    <li><span class={*accent} aria-hidden="true">{ *icon }</span>{ *text }</li>
                }) }
              </ul>
            </div>
          </div>
          <div class="card">
            <h3 class="card-title">{ "Conference Highlights" }</h3>
            <ul class="highlights">
              { for HIGHLIGHTS.iter().map(|h| html! { <li>{ format!("• {h}") }</li> }) }
            </ul>
          </div>
        </div>
      </section>
    }
}

#[function_component(SpeakersSection)]
pub fn speakers_section() -> Html {
    html! {
      <section id="speakers" class="container section">
        <h2 class="section-title">{ "Keynote Speakers" }</h2>
        <div class="speakers">
          { for SPEAKERS.iter().map(|s| html! {
              <div class="card speaker" key={s.name}>
                <img src={s.image} alt={s.name} />
                <div class="speaker-body">
                  <h3>{ s.name }</h3>
                  <p class="muted">{ s.title }</p>
                  <p class="small">{ s.company }</p>
                </div>
              </div>
          }) }
        </div>
      </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub form: FormState,
    pub notice: Option<Notice>,
    pub dispatch: Callback<SiteAction>,
}

#[function_component(RegisterSection)]
pub fn register_section(props: &RegisterProps) -> Html {
    let form = &props.form;

    let on_input = |field: Field| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let t = e.target_unchecked_into::<HtmlInputElement>();
            dispatch.emit(SiteAction::Edit(field, t.value()));
        })
    };

    let on_ticket = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            if let Some(t) = TicketType::from_key(&sel.value()) {
                dispatch.emit(SiteAction::SelectTicket(t));
            }
        })
    };

    let on_submit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(SiteAction::Submit);
        })
    };

    let notice = match &props.notice {
        Some(Notice::Invalid(e)) => html! { <div class="notice err" role="alert">{ e.to_string() }</div> },
        Some(Notice::Registered { name, ticket }) => html! {
            <div class="notice ok" role="status">
              { format!("Thank you, {name}! Your {} registration is confirmed.", ticket.label()) }
            </div>
        },
        None => html! {},
    };

    html! {
      <section id="register" class="container section">
        <div class="card form-card">
          <h2 class="section-title">{ "Conference Registration" }</h2>
          { notice }
          <form class="form" onsubmit={on_submit} novalidate={true}>
            <label>
              <span>{ "Full Name" }</span>
              <input type="text" placeholder="Enter your full name"
                value={form.name.clone()} oninput={on_input(Field::Name)} />
            </label>
            <label>
              <span>{ "Company/Organization" }</span>
              <input type="text" placeholder="Enter your company name"
                value={form.company.clone()} oninput={on_input(Field::Company)} />
            </label>
            <label>
              <span>{ "Email Address" }</span>
              <input type="email" placeholder="Enter your email"
                value={form.email.clone()} oninput={on_input(Field::Email)} />
            </label>
            <label>
              <span>{ "Registration Type" }</span>
              <select onchange={on_ticket}>
                { for TicketType::all().into_iter().map(|t| html! {
                    <option value={t.key()} selected={t == form.ticket_type}>{ t.label() }</option>
                }) }
              </select>
            </label>
            <button type="submit" class="btn btn-block">{ "Complete Registration" }</button>
          </form>
        </div>
      </section>
    }
}
