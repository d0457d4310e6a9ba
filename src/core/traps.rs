//! Financial trap scenarios: short branching stories where one unsafe choice
//! ends the run.
use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use std::fmt::Display;

/// XP awarded for getting through every step of a scenario.
pub const SURVIVAL_XP: u32 = 50;

#[derive(Debug, Serialize)]
pub struct ScenarioStep {
    pub text: &'static str,
    pub choices: &'static [&'static str],
    /// Index of the safe choice.
    pub correct: usize,
    pub explanation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Scenario {
    pub kind: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub steps: &'static [ScenarioStep],
}

static SCENARIOS: [Scenario; 4] = [
    Scenario {
        kind: "scam",
        title: "The \"Bank\" Call",
        intro: "You receive a frantic call from \"Bank Security\". They say your account is compromised.",
        steps: &[
            ScenarioStep {
                text: "The caller says: \"We need you to verify your identity immediately by reading the code we just sent to your phone.\"",
                choices: &[
                    "Read them the code quickly to secure the account.",
                    "Hang up and call the number on the back of your card.",
                ],
                correct: 1,
                explanation: "Never share 2FA codes. Banks will never ask for them. Always call the official number yourself.",
            },
            ScenarioStep {
                text: "You hang up, but they text you a link saying: \"Click here to freeze your account now!\"",
                choices: &[
                    "Click the link to be safe.",
                    "Ignore the text and log in to your banking app directly.",
                ],
                correct: 1,
                explanation: "Links in unsolicited texts are often phishing attempts. Use the official app or website.",
            },
        ],
    },
    Scenario {
        kind: "impulse",
        title: "The Flash Sale",
        intro: "A limited-time offer for a gadget you kind of want pops up. 50% off for the next 10 minutes!",
        steps: &[
            ScenarioStep {
                text: "The countdown timer is ticking. You have 2 minutes left!",
                choices: &["Buy it now! It's a steal!", "Wait. Do I actually need this?"],
                correct: 1,
                explanation: "Urgency is a marketing tactic. If you didn't plan to buy it, it's not a deal, it's spending.",
            },
            ScenarioStep {
                text: "You decide to wait, but now you see \"Only 2 left in stock!\"",
                choices: &["Okay, now I have to buy it!", "Close the tab and walk away."],
                correct: 1,
                explanation: "Scarcity tactics (fake stock counters) are common to force impulse buys. Walk away.",
            },
        ],
    },
    Scenario {
        kind: "pyramid",
        title: "The \"Business Opportunity\"",
        intro: "An old friend messages you about a \"revolutionary\" way to make money working from home.",
        steps: &[
            ScenarioStep {
                text: "They say: \"You just need to buy a $500 starter kit, and then you get paid for everyone you recruit!\"",
                choices: &[
                    "Sounds easy! Where do I sign up?",
                    "Ask: \"Do I make money from selling products or recruiting?\"",
                ],
                correct: 1,
                explanation: "If money comes primarily from recruiting, it's a pyramid scheme. Real businesses sell products.",
            },
            ScenarioStep {
                text: "They deflect: \"Don't you want financial freedom? Stop being a wage slave!\"",
                choices: &["You're right. I'm in.", "Block them. This is a scam."],
                correct: 1,
                explanation: "High-pressure emotional manipulation is a red flag. Protect your wallet and your friendships.",
            },
        ],
    },
    Scenario {
        kind: "bad_loan",
        title: "The Payday Loan",
        intro: "You're short on rent this month. You see an ad for \"Fast Cash, No Credit Check!\"",
        steps: &[
            ScenarioStep {
                text: "The terms say: \"Borrow $500 now, pay back $575 in two weeks.\"",
                choices: &[
                    "Take the deal. I need the money.",
                    "Calculate the APR. (It's nearly 400%!)",
                ],
                correct: 1,
                explanation: "Payday loans define predatory lending. The annualized interest rate (APR) is astronomical.",
            },
            ScenarioStep {
                text: "You realize the interest is high, but you have no other cash. What do you do?",
                choices: &[
                    "Take the loan anyway.",
                    "Call the landlord to explain and ask for an extension.",
                ],
                correct: 1,
                explanation: "Most landlords prefer communication over eviction. Payday loans often lead to a debt spiral.",
            },
        ],
    },
];

pub fn scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn find_scenario(kind: &str) -> Result<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|s| s.kind.eq_ignore_ascii_case(kind))
        .ok_or_else(|| {
            let known: Vec<&str> = SCENARIOS.iter().map(|s| s.kind).collect();
            anyhow!(
                "Unknown trap scenario: {} (expected one of {})",
                kind,
                known.join(", ")
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrapOutcome {
    Survived,
    Trapped,
}

impl TrapOutcome {
    pub fn xp_earned(&self) -> u32 {
        match self {
            TrapOutcome::Survived => SURVIVAL_XP,
            TrapOutcome::Trapped => 0,
        }
    }
}

impl Display for TrapOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TrapOutcome::Survived => "survived",
                TrapOutcome::Trapped => "trapped",
            }
        )
    }
}

/// Position in a scenario: either waiting on a step or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapState {
    Playing { step: usize },
    Finished(TrapOutcome),
}

/// Result of answering one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub step: usize,
    pub choice: usize,
    pub safe: bool,
    pub next: TrapState,
}

/// Starts a scenario at its first step.
pub fn start(scenario: &Scenario) -> TrapState {
    if scenario.steps.is_empty() {
        TrapState::Finished(TrapOutcome::Survived)
    } else {
        TrapState::Playing { step: 0 }
    }
}

/// Applies `choice` to the current step. Any choice other than the safe one
/// ends the scenario as trapped; a safe choice on the last step ends it as
/// survived.
pub fn choose(scenario: &Scenario, state: TrapState, choice: usize) -> Result<Move> {
    let step = match state {
        TrapState::Playing { step } => step,
        TrapState::Finished(outcome) => bail!("Scenario already finished: {outcome}"),
    };
    let current = scenario
        .steps
        .get(step)
        .ok_or_else(|| anyhow!("Step {step} is out of range"))?;
    if choice >= current.choices.len() {
        bail!(
            "Choice {} is out of range for step {} ({} choices)",
            choice,
            step,
            current.choices.len()
        );
    }

    let safe = choice == current.correct;
    let next = if !safe {
        TrapState::Finished(TrapOutcome::Trapped)
    } else if step + 1 < scenario.steps.len() {
        TrapState::Playing { step: step + 1 }
    } else {
        TrapState::Finished(TrapOutcome::Survived)
    };

    Ok(Move {
        step,
        choice,
        safe,
        next,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayedStep {
    pub text: &'static str,
    pub choice: &'static str,
    pub safe: bool,
    pub explanation: &'static str,
}

/// A scenario replayed from a list of choices.
#[derive(Debug, Clone, Serialize)]
pub struct TrapRun {
    pub kind: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub steps: Vec<PlayedStep>,
    /// `None` when the choices ran out before the scenario finished.
    pub outcome: Option<TrapOutcome>,
    pub xp_earned: u32,
}

/// Replays `choices` (zero-based) through `scenario`. Choices left over once
/// the scenario has finished are ignored.
pub fn play(scenario: &'static Scenario, choices: &[usize]) -> Result<TrapRun> {
    let mut state = start(scenario);
    let mut steps = Vec::new();

    for &choice in choices {
        if matches!(state, TrapState::Finished(_)) {
            break;
        }
        let mv = choose(scenario, state, choice)?;
        let current = &scenario.steps[mv.step];
        steps.push(PlayedStep {
            text: current.text,
            choice: current.choices[mv.choice],
            safe: mv.safe,
            explanation: current.explanation,
        });
        state = mv.next;
    }

    let outcome = match state {
        TrapState::Finished(outcome) => Some(outcome),
        TrapState::Playing { .. } => None,
    };

    Ok(TrapRun {
        kind: scenario.kind,
        title: scenario.title,
        intro: scenario.intro,
        steps,
        outcome,
        xp_earned: outcome.map_or(0, |o| o.xp_earned()),
    })
}
