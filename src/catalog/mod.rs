//! Built-in template sets, one per tone.
//!
//! Templates may only reference `{productName}`, `{description}`,
//! `{targetAudience}` and `{launchDate}`.

use crate::wire::Tone;

pub const SUBJECT_LINE_OPTIONS: usize = 5;
pub const PREVIEW_TEXT_OPTIONS: usize = 3;
pub const CALL_TO_ACTION_OPTIONS: usize = 4;

#[derive(Debug)]
pub struct TemplateSet {
    pub subject_lines: [&'static str; SUBJECT_LINE_OPTIONS],
    pub preview_text: [&'static str; PREVIEW_TEXT_OPTIONS],
    pub email_body: &'static str,
    pub call_to_actions: [&'static str; CALL_TO_ACTION_OPTIONS],
}

pub fn template_set(tone: Tone) -> &'static TemplateSet {
    match tone {
        Tone::Professional => &PROFESSIONAL,
        Tone::Exciting => &EXCITING,
        Tone::Minimal => &MINIMAL,
        Tone::Playful => &PLAYFUL,
    }
}

static PROFESSIONAL: TemplateSet = TemplateSet {
    subject_lines: [
        "Introducing {productName}: A Revolutionary Solution for {targetAudience}",
        "Transform Your {targetAudience} Experience with {productName}",
        "{productName} Launch: Professional-Grade Innovation for {targetAudience}",
        "Elevate Your {targetAudience} Capabilities with {productName}",
        "The Future of {targetAudience} is Here: {productName} Launch",
    ],
    preview_text: [
        "Discover how {productName} can revolutionize your {targetAudience} workflow and boost productivity.",
        "Join industry leaders who are already leveraging {productName} for superior {targetAudience} results.",
        "Learn about the advanced features that make {productName} the preferred choice for {targetAudience} professionals.",
    ],
    email_body: "Dear Valued Customer,

We are pleased to announce the official launch of {productName}, a groundbreaking solution designed specifically for {targetAudience}.

{description}

{productName} represents the culmination of extensive research and development, addressing the critical needs of {targetAudience} professionals. Our team has worked tirelessly to deliver a product that exceeds industry standards and provides tangible value to your operations.

Key Benefits:
• Enhanced efficiency and productivity
• Advanced features tailored for {targetAudience}
• Professional-grade reliability and support
• Competitive pricing for early adopters

Launch Date: {launchDate}

We invite you to be among the first to experience the transformative capabilities of {productName}. Our team is ready to provide comprehensive support and ensure a smooth implementation process.

Best regards,
The {productName} Team",
    call_to_actions: [
        "Schedule a Product Demo",
        "Request Pricing Information",
        "Download Product Brochure",
        "Contact Sales Team",
    ],
};

static EXCITING: TemplateSet = TemplateSet {
    subject_lines: [
        "🚀 {productName} is HERE! Don't Miss the Launch of the Century!",
        "BREAKING: {productName} Just Dropped - Game Changer for {targetAudience}!",
        "🎉 {productName} Launch Day! Your {targetAudience} Will Never Be the Same!",
        "🔥 {productName} is Finally Live! Revolutionary {targetAudience} Solution!",
        "⚡ {productName} Launch Alert! The Future of {targetAudience} Starts NOW!",
    ],
    preview_text: [
        "Get ready to revolutionize your {targetAudience} with the most innovative product launch of the year!",
        "The moment you've been waiting for is here! {productName} is about to change everything for {targetAudience}.",
        "Brace yourself for the most exciting {targetAudience} innovation in decades - {productName} is launching!",
    ],
    email_body: "🎉 EXCITING NEWS! 🎉

{productName} is OFFICIALLY LAUNCHING and it's going to blow your mind!

{description}

This isn't just another product - it's a REVOLUTION for {targetAudience}! We've packed {productName} with cutting-edge features that will transform how you approach {targetAudience} forever.

🚀 What Makes {productName} Special:
• Revolutionary technology that's years ahead of the competition
• Game-changing features designed specifically for {targetAudience}
• Lightning-fast performance that will amaze you
• Pricing that will make your competitors jealous

🎯 Launch Date: {launchDate}

Don't wait! This is your chance to be at the forefront of {targetAudience} innovation. Early adopters get exclusive benefits and pricing that won't last long.

The future is here, and it's called {productName}!",
    call_to_actions: [
        "🚀 Get It Now - Limited Time!",
        "🎯 See It in Action - Watch Demo!",
        "🔥 Join the Revolution - Sign Up!",
        "⚡ Early Bird Special - Claim Yours!",
    ],
};

static MINIMAL: TemplateSet = TemplateSet {
    subject_lines: [
        "{productName} Launch",
        "New: {productName}",
        "{productName} is Available",
        "Introducing {productName}",
        "{productName} - Now Live",
    ],
    preview_text: [
        "{productName} is now available for {targetAudience}.",
        "Simple. Effective. {productName}.",
        "The {targetAudience} solution you've been waiting for.",
    ],
    email_body: "{productName}

{description}

Available: {launchDate}

For {targetAudience}.

{productName} Team",
    call_to_actions: ["Learn More", "Get Started", "View Details", "Contact Us"],
};

static PLAYFUL: TemplateSet = TemplateSet {
    subject_lines: [
        "🎈 {productName} is Having a Launch Party - You're Invited!",
        "🎪 Step Right Up! {productName} is Finally Here!",
        "🎭 The {productName} Show is About to Begin!",
        "🎨 {productName} is Painting the Town with Innovation!",
        "🎪 Welcome to the Greatest {productName} Show on Earth!",
    ],
    preview_text: [
        "Come join the fun! {productName} is launching and it's going to be a blast for {targetAudience}!",
        "Get ready to play with the coolest {targetAudience} tool ever - {productName} is here!",
        "Time to have some fun! {productName} is launching and it's going to make {targetAudience} exciting!",
    ],
    email_body: "🎉 Welcome to the {productName} Launch Party! 🎉

Guess what? {productName} is finally here and it's going to make {targetAudience} so much fun!

{description}

We've created something special for {targetAudience} - a product that's not just useful, but actually enjoyable to use! {productName} combines powerful functionality with a delightful user experience that will put a smile on your face.

🎪 What's Inside the {productName} Magic Box:
• Fun and intuitive features that make {targetAudience} exciting
• Playful design that brightens your day
• Powerful capabilities wrapped in joy
• A user experience that feels like play, not work

🎈 Launch Date: {launchDate}

Come join the celebration! {productName} is here to make {targetAudience} the highlight of your day.

Let's make some magic happen! ✨",
    call_to_actions: [
        "🎈 Join the Party - Get Started!",
        "🎪 Take a Tour - See the Magic!",
        "🎨 Start Creating - Begin Your Journey!",
        "🎭 Get Your Ticket - Sign Up Now!",
    ],
};
