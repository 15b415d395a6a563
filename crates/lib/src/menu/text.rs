//! User-facing reply texts.

pub const WELCOME: &str = "👋 **Welcome to Atica Support!**\n🏢 *Atica - Your Trusted Partner in Business Management*\n\n";

pub const INVALID_MESSAGE_REPLY: &str = "⚠️ Please send a valid message.";

pub const NOT_REGISTERED_REPLY: &str =
    "⚠️ Your phone number is not registered. Please contact support.";

pub const MAIN_MENU: &str = "Please select any one of the following options:\n\n\
1️⃣ **Pricing and Rate Information**\n\
2️⃣ **Lead Management & RFPs**\n\
3️⃣ **Reports**\n\
4️⃣ **Meeting Schedules**\n\
5️⃣ **Escalations and Support**\n\
6️⃣ **Others (Type 'Others')**\n\n\
*Select the option by typing the number next to the option.*";

pub const PRICING_MENU: &str = "*📊 Pricing and Rate Information*\n\n\
1️⃣ Alter the rates of specific dates\n\
2️⃣ View pricing for next 30 days\n\
3️⃣ View pricing for event dates\n\
4️⃣ View discounts running on the property";

pub const LEAD_MANAGEMENT_MENU: &str = "*📑 Lead Management & RFPs*\n\n\
1️⃣ Submit a lead\n\
2️⃣ Change lead details\n\
3️⃣ View latest update on any lead";

pub const REPORTS_MENU: &str = "*📈 Reports*\n\n\
1️⃣ View/Download STR Report\n\
2️⃣ View/Download OTA Recon Report\n\
3️⃣ View/Download Daily Snapshot Report\n\
4️⃣ View/Download Client Month End Report\n\
5️⃣ View/Download Reputation Report";

pub const MEETING_SCHEDULE_MENU: &str = "*📅 Meeting Schedules*\n\n\
1️⃣ View next meetings and joining info\n\
2️⃣ Schedule a meeting";

pub const ESCALATION_MENU: &str = "*⚙️ Escalations and Support*\n\n\
1️⃣ Revenue Management\n\
2️⃣ Sales Management\n\
3️⃣ Account Management";

pub const REVENUE_MANAGEMENT_MENU: &str = "*📊 Revenue Management*\n\n\
1️⃣ Low Booking ADR\n\
2️⃣ Pricing\n\
3️⃣ Performance Issue/Production";

pub const SALES_MANAGEMENT_MENU: &str = "*💼 Sales Management*\n\n\
1️⃣ Regarding Rooming List\n\
2️⃣ Regarding Credit Card\n\
3️⃣ Regarding Group Block\n\
4️⃣ Performance/Production Issue";

pub const ACCOUNT_MANAGEMENT_MENU: &str = "*📅 Account Management*\n\n\
1️⃣ Payment Issues\n\
2️⃣ POC Issues\n\
3️⃣ Performance/Production Issues";

pub const ELABORATION_PROMPT: &str =
    "⚠️ Please elaborate on your escalation. Provide details to help us understand the issue better.";

pub const OTHERS_PROMPT: &str =
    "✍️ **For other inquiries, please specify your query, and our support team will assist you.**";

pub const INVALID_CHOICE: &str = "⚠️ Invalid choice.";
pub const INVALID_OPTION: &str = "⚠️ Invalid choice. Please select a valid option.";
pub const INVALID_CATEGORY: &str = "⚠️ Invalid choice. Please select a valid category.";
pub const INVALID_ISSUE_TYPE: &str = "⚠️ Invalid choice. Please select a valid issue type.";

pub const ELABORATION_BLANK: &str = "⚠️ Please provide more details for your escalation.";
pub const OTHERS_BLANK: &str = "⚠️ Please provide more details for your inquiry.";
