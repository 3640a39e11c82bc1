use yew::prelude::*;

use crate::content::{QUICK_LINKS, SOCIAL_LINKS};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact_email: AttrValue,
    pub city: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
      <footer class="site-footer">
        <div class="container footer-grid">
          <div>
            <h3>{ "Contact Information" }</h3>
            <p>
              <span aria-hidden="true">{ "✉ " }</span>
              <a href={format!("mailto:{}", props.contact_email)}>{ props.contact_email.clone() }</a>
            </p>
            <p><span aria-hidden="true">{ "📍 " }</span>{ props.city.clone() }</p>
          </div>
          <div>
            <h3>{ "Quick Links" }</h3>
            <ul>
              { for QUICK_LINKS.iter().map(|l| html! { <li><a href="#">{ *l }</a></li> }) }
            </ul>
          </div>
          <div>
            <h3>{ "Stay Connected" }</h3>
            <div class="social">
              { for SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                  <a href="#" aria-label={*label}>{ *icon }</a>
              }) }
            </div>
          </div>
        </div>
      </footer>
    }
}
