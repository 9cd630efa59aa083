//! Fixed product text: example questions, email defaults and the response
//! style instruction sent with every question.

/// Example questions offered to new users.
pub const EXAMPLE_TRAVEL_QUESTIONS: &[&str] = &[
    "Plan a 3-day trip to Pattaya",
    "Plan a 5-day trip to Paris",
    "Show me a budget-friendly plan for Bangkok",
    "Plan a family vacation in Tokyo for 7 days",
    "Create an adventure trip to New Zealand",
    "Plan a romantic getaway to Santorini",
    "Show me an off-beat plan for Pattaya",
    "Plan a backpacking trip through Southeast Asia",
];

/// Appended to every question before it is sent to the travel API.
pub const RESPONSE_STYLE_SUFFIX: &str = " Don't use *,#@,%,^,&,() characters in the response. make headings bold and use bullet points for lists.";

pub const DEFAULT_EMAIL_SUBJECT: &str = "Your AI-Generated Travel Plan";

/// Number of leading question words used in a generated subject.
pub const SUBJECT_QUESTION_WORDS: usize = 5;

pub const DEFAULT_EMAIL_BODY: &str = "Greetings from EasyAI Itinerary,

Thank you for using our platform to plan your trip.

Your travel plan has been generated successfully on our platform.

Safe travels,
The EasyAI Itinerary Team";

pub const EMAIL_FAILURE_MESSAGE: &str = "Failed to send email. Please try again.";
