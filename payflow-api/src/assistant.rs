//! Mock AI assistant
//!
//! Placeholder for a future LLM integration. Every reply is deterministic
//! canned content so the demo behaves identically on every run. The service
//! is constructed once at startup and handed to handlers through
//! `AppState` rather than living behind a global.

use serde::Serialize;
use serde_json::{json, Value};

/// A single personalized recommendation
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub potential_savings: f64,
}

/// Deterministic stand-in for an AI provider client
///
/// A real integration would hold an API client here and make the methods
/// async; the mock keeps them synchronous since no I/O happens.
#[derive(Debug, Default)]
pub struct AssistantService;

impl AssistantService {
    pub fn new() -> Self {
        Self
    }

    /// Employee data context echoed back with chat replies
    pub fn employee_context(&self) -> Value {
        json!({
            "available": 2500.00,
            "earned": 8450.00,
            "next_payday": "2024-12-16"
        })
    }

    /// Keyword-routed canned chat reply
    pub fn chat_reply(&self, message: &str) -> String {
        let message = message.to_lowercase();

        if message.contains("withdraw") || message.contains("cash out") {
            "Based on your current earnings of ₱8,450, you have ₱2,500 available for early \
             withdrawal. This represents 30% of your earned wages for this period."
                .to_string()
        } else if message.contains("when") && message.contains("payday") {
            "Your next payday is December 16, 2024. You're currently in the pay period of \
             Dec 1-15."
                .to_string()
        } else if message.contains("how much") {
            "You've earned ₱8,450 this period. ₱2,500 is available for immediate withdrawal, \
             and the remaining ₱5,950 will be paid on your regular payday."
                .to_string()
        } else {
            "I'm your PayFlow AI assistant! I can help you understand your earnings, \
             withdrawal options, and payday schedule. What would you like to know?"
                .to_string()
        }
    }

    /// Canned spending-pattern analysis
    pub fn spending_analysis(&self) -> Value {
        json!({
            "success": true,
            "insights": [
                {
                    "type": "pattern",
                    "title": "Consistent Early Withdrawals",
                    "description": "You typically withdraw ₱1,000 every week. Consider budgeting to reduce early withdrawal fees.",
                    "severity": "info"
                },
                {
                    "type": "recommendation",
                    "title": "Optimal Withdrawal Day",
                    "description": "Based on your spending, withdrawing on Mondays saves you an average of ₱50 in fees.",
                    "severity": "success"
                },
                {
                    "type": "alert",
                    "title": "High Withdrawal Rate",
                    "description": "You're withdrawing 80% of available funds. This may impact your savings goals.",
                    "severity": "warning"
                }
            ],
            "score": 72,
            "savings_potential": 200.00
        })
    }

    /// Canned personalized recommendations
    pub fn recommendations(&self) -> Vec<Recommendation> {
        vec![
            Recommendation {
                title: "Build Emergency Fund".to_string(),
                description: "Try to keep at least ₱1,500 for emergencies instead of \
                              withdrawing everything."
                    .to_string(),
                priority: "high".to_string(),
                potential_savings: 500.00,
            },
            Recommendation {
                title: "Reduce Withdrawal Frequency".to_string(),
                description: "Consolidate smaller withdrawals into one larger transaction to \
                              save on fees."
                    .to_string(),
                priority: "medium".to_string(),
                potential_savings: 150.00,
            },
            Recommendation {
                title: "Take Advantage of Payday".to_string(),
                description: "Wait 2 more days until payday to avoid early withdrawal fees of \
                              ₱75."
                    .to_string(),
                priority: "low".to_string(),
                potential_savings: 75.00,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_routes_withdrawal_questions() {
        let service = AssistantService::new();
        let reply = service.chat_reply("Can I withdraw some money?");
        assert!(reply.contains("₱2,500"));
    }

    #[test]
    fn test_chat_routes_payday_questions() {
        let service = AssistantService::new();
        let reply = service.chat_reply("When is my payday?");
        assert!(reply.contains("December 16, 2024"));
    }

    #[test]
    fn test_chat_fallback_reply() {
        let service = AssistantService::new();
        let reply = service.chat_reply("hello there");
        assert!(reply.contains("PayFlow AI assistant"));
    }

    #[test]
    fn test_chat_is_deterministic() {
        let service = AssistantService::new();
        assert_eq!(service.chat_reply("how much?"), service.chat_reply("how much?"));
    }

    #[test]
    fn test_recommendations_savings_sum() {
        let service = AssistantService::new();
        let total: f64 = service
            .recommendations()
            .iter()
            .map(|r| r.potential_savings)
            .sum();
        assert_eq!(total, 725.00);
    }
}
