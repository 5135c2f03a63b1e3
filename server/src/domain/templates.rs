//! Built-in agent templates.

use paragon_common::{AgentDefaultConfig, AgentTemplate, AgentType};

fn template(
    id: &str,
    name: &str,
    description: &str,
    agent_type: AgentType,
    framework: &str,
    use_cases: &[&str],
    system_prompt: &str,
) -> AgentTemplate {
    AgentTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        agent_type,
        framework: framework.to_string(),
        use_cases: use_cases.iter().map(ToString::to_string).collect(),
        default_config: AgentDefaultConfig {
            system_prompt: system_prompt.to_string(),
            ..AgentDefaultConfig::default()
        },
    }
}

/// Templates every registry starts with.
#[must_use]
pub fn builtin_templates() -> Vec<AgentTemplate> {
    vec![
        template(
            "customer-support-v1",
            "Customer Support Agent",
            "AI agent for handling customer inquiries, FAQs, and support tickets using LangChain with Groq's Mixtral model",
            AgentType::CustomerSupport,
            "LangChain",
            &[
                "Answer frequently asked questions",
                "Handle basic support tickets",
                "Provide product information",
                "Route complex issues to human agents",
            ],
            "You are a helpful customer support agent. Your goal is to assist users with their inquiries in a friendly and professional manner.",
        ),
        template(
            "content-writer-v1",
            "Content Writer Agent",
            "AI agent for generating blog posts, articles, and marketing content using CrewAI with Groq's Mixtral model",
            AgentType::ContentWriter,
            "CrewAI",
            &[
                "Generate blog post ideas",
                "Write SEO-optimized articles",
                "Create social media content",
                "Draft marketing copy",
            ],
            "You are a creative content writer. Generate engaging and original content based on the user's requirements.",
        ),
        template(
            "data-analyst-v1",
            "Data Analyst Agent",
            "AI agent for analyzing datasets and generating insights using AutoGen with Groq's Mixtral model",
            AgentType::DataAnalyst,
            "AutoGen",
            &[
                "Analyze CSV/Excel data",
                "Generate statistical summaries",
                "Create data visualizations",
                "Identify trends and patterns",
            ],
            "You are a data analyst. Analyze the provided data and provide clear, actionable insights.",
        ),
    ]
}
