use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::countdown::{now_ms, pad2, parse_end_date, TimeRemaining, DEFAULT_END_DATE, TICK_MS};

#[derive(Properties, PartialEq)]
pub struct RegistrationTimerProps {
    /// ISO-8601 target; unparseable values count down from zero.
    #[prop_or(AttrValue::from(DEFAULT_END_DATE))]
    pub end_date: AttrValue,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

/// Floating countdown in the bottom-right corner. Once closed it stops
/// ticking and renders nothing for the rest of the session.
#[function_component(RegistrationTimer)]
pub fn registration_timer(props: &RegistrationTimerProps) -> Html {
    let visible = use_state(|| true);
    let remaining = use_state_eq(|| TimeRemaining::ZERO);

    // Recompute once on mount, then every tick while visible
    {
        let remaining = remaining.clone();
        use_effect_with(
            (props.end_date.clone(), *visible),
            move |(end_date, visible)| {
                let mut interval: Option<Interval> = None;

                if *visible {
                    let target = parse_end_date(end_date);
                    if target.is_none() {
                        gloo::console::warn!(format!(
                            "countdown target {end_date:?} is not a valid date; showing zero"
                        ));
                    }

                    let recompute = move || {
                        let t = target
                            .map(|t| TimeRemaining::between(t, now_ms()))
                            .unwrap_or(TimeRemaining::ZERO);
                        remaining.set(t);
                    };
                    recompute();
                    interval = Some(Interval::new(TICK_MS, recompute));
                }

                move || drop(interval)
            },
        );
    }

    let on_close = {
        let visible = visible.clone();
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            visible.set(false);
            gloo::console::log!("registration timer dismissed");
            if let Some(cb) = &cb {
                cb.emit(());
            }
        })
    };

    if !*visible {
        return html! {};
    }

    let units = remaining.units();

    html! {
      <aside class="timer" aria-label="Registration countdown">
        <div class={classes!("timer-card", remaining.is_zero().then_some("timer-done"))}>
          <div class="timer-head">
            <button class="timer-close" onclick={on_close} aria-label="Close timer">{ "✕" }</button>
          </div>
          <div class="timer-units">
            { for units.iter().map(|(unit, v)| html! {
                <div class="timer-unit" key={*unit}>
                  <span class="timer-value">{ pad2(*v) }</span>
                  <span class="timer-label">{ *unit }</span>
                </div>
            }) }
          </div>
        </div>
      </aside>
    }
}
