// View state for the whole site, driven through `use_reducer`.

use std::rc::Rc;

use yew::Reducible;

use crate::form::{Field, FormState, RegistrationError, TicketType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Speakers,
    Register,
}

impl Section {
    pub fn all() -> [Section; 4] {
        [Section::Home, Section::About, Section::Speakers, Section::Register]
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Speakers => "Speakers",
            Section::Register => "Register",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Speakers => "speakers",
            Section::Register => "register",
        }
    }
}

/// Outcome of the last form submit, shown inline above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid(RegistrationError),
    Registered { name: String, ticket: TicketType },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteState {
    pub section: Section,
    pub menu_open: bool,
    pub scrolled: bool,
    pub form: FormState,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteAction {
    Navigate(Section),
    ToggleMenu,
    /// Close control, click outside the panel.
    CloseMenu,
    Scrolled(bool),
    Edit(Field, String),
    SelectTicket(TicketType),
    Submit,
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Return the same Rc when nothing changes so Yew skips the render;
        // Scrolled fires on every scroll event.
        match action {
            SiteAction::CloseMenu if !self.menu_open => return self,
            SiteAction::Scrolled(s) if s == self.scrolled => return self,
            _ => {}
        }

        let mut next = (*self).clone();
        match action {
            SiteAction::Navigate(section) => {
                next.section = section;
                next.menu_open = false;
                next.notice = None;
            }
            SiteAction::ToggleMenu => next.menu_open = !next.menu_open,
            SiteAction::CloseMenu => next.menu_open = false,
            SiteAction::Scrolled(s) => next.scrolled = s,
            SiteAction::Edit(field, value) => {
                next.form.set(field, value);
                next.notice = None;
            }
            SiteAction::SelectTicket(ticket) => {
                next.form.ticket_type = ticket;
                next.notice = None;
            }
            SiteAction::Submit => match next.form.validate() {
                Ok(()) => {
                    next.notice = Some(Notice::Registered {
                        name: next.form.name.trim().to_string(),
                        ticket: next.form.ticket_type,
                    });
                    next.form = FormState::default();
                }
                Err(e) => next.notice = Some(Notice::Invalid(e)),
            },
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: SiteState, actions: impl IntoIterator<Item = SiteAction>) -> Rc<SiteState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |s, a| s.reduce(a))
    }

    #[test]
    fn starts_on_home_with_menu_closed() {
        let s = SiteState::default();
        assert_eq!(s.section, Section::Home);
        assert!(!s.menu_open);
        assert!(s.notice.is_none());
    }

    #[test]
    fn navigation_shows_exactly_one_section() {
        for target in Section::all() {
            let s = run(SiteState::default(), [SiteAction::Navigate(target)]);
            let shown: Vec<_> = Section::all().into_iter().filter(|x| s.section == *x).collect();
            assert_eq!(shown, vec![target]);
        }
    }

    #[test]
    fn toggle_flips_menu() {
        let s = run(SiteState::default(), [SiteAction::ToggleMenu]);
        assert!(s.menu_open);
        let s = s.reduce(SiteAction::ToggleMenu);
        assert!(!s.menu_open);
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let s = run(
            SiteState::default(),
            [SiteAction::ToggleMenu, SiteAction::CloseMenu],
        );
        assert!(!s.menu_open);
    }

    #[test]
    fn close_while_closed_keeps_same_state() {
        let s = Rc::new(SiteState::default());
        let after = s.clone().reduce(SiteAction::CloseMenu);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn navigating_closes_menu() {
        let s = run(
            SiteState::default(),
            [SiteAction::ToggleMenu, SiteAction::Navigate(Section::Speakers)],
        );
        assert!(!s.menu_open);
        assert_eq!(s.section, Section::Speakers);
    }

    #[test]
    fn repeated_scroll_state_is_a_no_op() {
        let s = run(SiteState::default(), [SiteAction::Scrolled(true)]);
        assert!(s.scrolled);
        let again = s.clone().reduce(SiteAction::Scrolled(true));
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn submit_without_name_keeps_fields() {
        let s = run(
            SiteState::default(),
            [
                SiteAction::Navigate(Section::Register),
                SiteAction::Edit(Field::Email, "grace@example.com".into()),
                SiteAction::Edit(Field::Company, "Navy".into()),
                SiteAction::SelectTicket(TicketType::Vip),
                SiteAction::Submit,
            ],
        );
        assert_eq!(s.notice, Some(Notice::Invalid(RegistrationError::MissingName)));
        assert_eq!(s.form.email, "grace@example.com");
        assert_eq!(s.form.company, "Navy");
        assert_eq!(s.form.ticket_type, TicketType::Vip);
        assert_eq!(s.section, Section::Register);
    }

    #[test]
    fn successful_submit_resets_form() {
        let s = run(
            SiteState::default(),
            [
                SiteAction::Edit(Field::Name, " Grace Hopper ".into()),
                SiteAction::Edit(Field::Email, "grace@example.com".into()),
                SiteAction::SelectTicket(TicketType::Premium),
                SiteAction::Submit,
            ],
        );
        assert_eq!(
            s.notice,
            Some(Notice::Registered {
                name: "Grace Hopper".into(),
                ticket: TicketType::Premium
            })
        );
        assert_eq!(s.form, FormState::default());
    }

    #[test]
    fn editing_clears_notice() {
        let s = run(
            SiteState::default(),
            [
                SiteAction::Submit,
                SiteAction::Edit(Field::Name, "G".into()),
            ],
        );
        assert!(s.notice.is_none());
        assert_eq!(s.form.name, "G");
    }
}
