use reverse_core::ThoughtAnalysis;

/// Pre-written substitute shown when the model reply is missing or invalid.
pub fn fallback_analysis() -> ThoughtAnalysis {
    ThoughtAnalysis {
        pattern: Some("We couldn't analyze this thought right now".to_string()),
        reversal: "Sometimes the most powerful reversal is simply sitting with a thought a little longer."
            .to_string(),
        explanation:
            "The analysis service is temporarily unavailable. Try rephrasing your thought or come back in a moment."
                .to_string(),
    }
}

/// Distinct substitute when the upstream API reports rate limiting.
pub fn rate_limited_fallback() -> ThoughtAnalysis {
    ThoughtAnalysis {
        pattern: Some("High demand".to_string()),
        reversal: "Lots of minds are being reversed right now; yours is worth the short wait.".to_string(),
        explanation: "The AI service is receiving too many requests. Please wait a minute and try again."
            .to_string(),
    }
}
