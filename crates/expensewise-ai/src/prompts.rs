//! Fixed texts of the assistant panel.

/// Seeded first message of every session.
pub const GREETING: &str = "您好！我是您的 ExpenseWise 财务助手。我可以帮您分析预算状况、起草费用控制策略，或审核特定的报账申请。有什么可以帮您的吗？";

/// Sent as `systemInstruction` with every completion request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional corporate financial assistant integrated into a budget control platform. Provide concise, expert advice on budgeting, expense auditing, and financial policy creation. Always be helpful and professional.";

/// Assistant reply when the service answers with empty text.
pub const EMPTY_REPLY_FALLBACK: &str = "对不起，我现在无法处理您的请求。";

/// Assistant reply when the service call fails for any reason.
pub const CONNECTION_FAILED_FALLBACK: &str = "连接 AI 助手失败，请检查 API 配置。";

/// Shown by the presentation surface while a request is pending.
pub const THINKING_INDICATOR: &str = "正在思考...";
