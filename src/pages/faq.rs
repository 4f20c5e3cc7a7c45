use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{matches_query, FaqCategory, FaqEntry};
use crate::pages::page_setup;
use crate::utils::storage;

const QUERY_KEY: &str = "vantora_faq_query";

fn categories() -> Vec<(&'static str, Vec<FaqEntry>)> {
    vec![
        (
            "Working together",
            vec![
                FaqEntry {
                    id: "engagement-start",
                    question: "How does an engagement start?",
                    answer: "Every project opens with a one-week discovery sprint. You get a written \
                             assessment, a scoped plan and a fixed price before committing to anything \
                             larger.",
                },
                FaqEntry {
                    id: "project-length",
                    question: "How long does a typical project take?",
                    answer: "Most engagements run eight to twelve weeks end to end. Smaller brand or \
                             site refreshes can land in four.",
                },
                FaqEntry {
                    id: "remote-teams",
                    question: "Do you work with remote teams?",
                    answer: "Yes. The studio is distributed across four time zones and every ritual we \
                             run works over a video call.",
                },
            ],
        ),
        (
            "Process & delivery",
            vec![
                FaqEntry {
                    id: "tech-stack",
                    question: "What do you build on?",
                    answer: "Proven, boring technology your own engineers can maintain. We pick the \
                             stack with you during discovery rather than arriving with a default.",
                },
                FaqEntry {
                    id: "handoff",
                    question: "What does handoff look like?",
                    answer: "Recorded walkthroughs, written runbooks and a pairing week with your team. \
                             Handoff is a phase of the project, not an email at the end.",
                },
                FaqEntry {
                    id: "revisions",
                    question: "How many revision rounds are included?",
                    answer: "Two structured rounds per milestone. In practice, weekly working sessions \
                             catch most changes long before a formal round is needed.",
                },
            ],
        ),
        (
            "Billing & support",
            vec![
                FaqEntry {
                    id: "pricing",
                    question: "How is pricing structured?",
                    answer: "Fixed fee for scoped projects, a monthly retainer for ongoing product \
                             work. Either way the number is agreed before work starts.",
                },
                FaqEntry {
                    id: "payment-terms",
                    question: "What payment terms do you offer?",
                    answer: "A third on signing, a third at the midpoint review, a third on launch. \
                             Retainers bill at the start of each month.",
                },
                FaqEntry {
                    id: "post-launch",
                    question: "Is there support after launch?",
                    answer: "Every launch includes a thirty-day support window for fixes at no charge. \
                             After that, most clients move to a light retainer.",
                },
            ],
        ),
    ]
}

/// FAQ page: live search over every category, with the accordion state
/// owned per category. The search text survives in-tab navigation via
/// `sessionStorage`.
#[function_component(Faq)]
pub fn faq() -> Html {
    use_effect_with_deps(move |_| page_setup(), ());

    let query = use_state(String::new);

    {
        let query = query.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(saved) = storage::session_get::<String>(QUERY_KEY) {
                    query.set(saved);
                }
                || ()
            },
            (),
        );
    }

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if value.is_empty() {
                storage::session_remove(QUERY_KEY);
            } else {
                storage::session_set(QUERY_KEY, &value);
            }
            query.set(value);
        })
    };

    let cats = categories();
    let any_match = cats.iter().any(|(_, entries)| {
        entries
            .iter()
            .any(|e| matches_query(e.question, e.answer, &query))
    });

    html! {
        <div class="faq-page">
            <section class="page-hero">
                <div class="container">
                    <h1 class="fade-in">{"Questions, answered"}</h1>
                    <div class="faq-search fade-in delay-1">
                        <i class="fas fa-magnifying-glass"></i>
                        <input
                            type="text"
                            placeholder="Search the FAQ"
                            value={(*query).clone()}
                            {oninput}
                        />
                    </div>
                </div>
            </section>

            <section class="section faq-body">
                <div class="container">
                    { for cats.into_iter().map(|(title, entries)| html! {
                        <FaqCategory
                            key={title}
                            title={title}
                            entries={entries}
                            query={(*query).clone()}
                        />
                    })}
                    if !any_match {
                        <p class="faq-empty">
                            {"Nothing matches that search. Try a different word, or just ask us directly."}
                        </p>
                    }
                </div>
            </section>

            <style>
                {r#"
                .faq-search {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    max-width: 480px;
                    margin-top: 1.5rem;
                    padding: 0.75rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 10px;
                    background: #151922;
                }
                .faq-search i {
                    color: #9aa3af;
                }
                .faq-search input {
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #e7e9ec;
                    font-size: 1rem;
                }
                .faq-body {
                    padding-top: 2rem;
                }
                .faq-category {
                    margin-bottom: 3rem;
                }
                .faq-category h2 {
                    font-size: 1.3rem;
                    color: #2dd4bf;
                    margin-bottom: 1rem;
                }
                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 10px;
                    margin-bottom: 0.75rem;
                    background: #151922;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.1rem 1.25rem;
                    border: none;
                    background: none;
                    color: #e7e9ec;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                }
                .faq-question i {
                    color: #2dd4bf;
                    flex-shrink: 0;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-answer.active {
                    max-height: 320px;
                }
                .faq-answer p {
                    padding: 0 1.25rem 1.1rem 1.25rem;
                    margin: 0;
                    color: #9aa3af;
                }
                .faq-empty {
                    color: #9aa3af;
                    text-align: center;
                    padding: 2rem 0;
                }
                "#}
            </style>
        </div>
    }
}
