use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::dom;

/// Open-state for one accordion category: at most one entry open at a
/// time, and toggling the open entry closes it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExclusiveOpen {
    active: Option<usize>,
}

impl ExclusiveOpen {
    pub fn opened_at(ix: usize) -> Self {
        Self { active: Some(ix) }
    }

    pub fn toggle(&mut self, ix: usize) {
        self.active = if self.active == Some(ix) {
            None
        } else {
            Some(ix)
        };
    }

    pub fn is_open(&self, ix: usize) -> bool {
        self.active == Some(ix)
    }
}

/// Case-insensitive substring match over a question and its answer. An
/// empty query matches everything.
pub fn matches_query(question: &str, answer: &str, query: &str) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty()
        || question.to_lowercase().contains(&needle)
        || answer.to_lowercase().contains(&needle)
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    /// Anchor id, also the deep-link target.
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub entry: FaqEntry,
    pub open: bool,
    pub ontoggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let FaqItemProps { entry, open, ontoggle } = props;
    html! {
        <div id={entry.id} class={classes!("faq-item", open.then_some("open"))}>
            <button
                class={classes!("faq-question", open.then_some("active"))}
                onclick={ontoggle.clone()}
            >
                <span>{entry.question}</span>
                if *open {
                    <i class="fas fa-chevron-up"></i>
                } else {
                    <i class="fas fa-chevron-down"></i>
                }
            </button>
            <div class={classes!("faq-answer", open.then_some("active"))}>
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqCategoryProps {
    pub title: AttrValue,
    pub entries: Vec<FaqEntry>,
    /// Live search text; entries that match neither question nor answer
    /// are hidden. The whole category disappears when nothing matches.
    #[prop_or_default]
    pub query: AttrValue,
}

/// One titled accordion group. Opening an entry closes its siblings, but
/// entries in other categories are unaffected.
#[function_component(FaqCategory)]
pub fn faq_category(props: &FaqCategoryProps) -> Html {
    let open = use_state(ExclusiveOpen::default);

    // Deep link: #<entry-id> in the URL opens that entry and scrolls to it
    // once the accordion has rendered.
    {
        let open = open.clone();
        let entries = props.entries.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(hash) = dom::window().and_then(|w| w.location().hash().ok()) {
                    if let Some(ix) = entries
                        .iter()
                        .position(|e| hash.strip_prefix('#') == Some(e.id))
                    {
                        open.set(ExclusiveOpen::opened_at(ix));
                        let id = entries[ix].id;
                        Timeout::new(100, move || dom::smooth_scroll_to_id(id)).forget();
                    }
                }
                || ()
            },
            (),
        );
    }

    let visible: Vec<(usize, &FaqEntry)> = props
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches_query(entry.question, entry.answer, &props.query))
        .collect();

    if visible.is_empty() {
        return html! {};
    }

    html! {
        <section class="faq-category">
            <h2>{&props.title}</h2>
            { for visible.into_iter().map(|(ix, entry)| {
                let ontoggle = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*open).clone();
                        next.toggle(ix);
                        open.set(next);
                    })
                };
                html! {
                    <FaqItem
                        key={entry.id}
                        entry={entry.clone()}
                        open={open.is_open(ix)}
                        {ontoggle}
                    />
                }
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_moves_the_single_open_slot() {
        let mut state = ExclusiveOpen::default();
        assert!(!state.is_open(0));

        state.toggle(0);
        assert!(state.is_open(0));

        // Opening another entry closes the first.
        state.toggle(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));

        // Toggling the open entry closes it.
        state.toggle(2);
        assert!(!state.is_open(2));
    }

    #[test]
    fn search_matches_question_or_answer_case_insensitively() {
        let q = "How long does a project take?";
        let a = "Most engagements run eight to twelve weeks.";
        assert!(matches_query(q, a, "PROJECT"));
        assert!(matches_query(q, a, "twelve"));
        assert!(matches_query(q, a, ""));
        assert!(!matches_query(q, a, "pricing"));
    }

    #[test]
    fn search_is_substring_not_word_based() {
        assert!(matches_query("Billing cycles", "Monthly invoices.", "voic"));
    }
}
