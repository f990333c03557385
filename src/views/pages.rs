use serde::Serialize;

use crate::views::{Link, CREATE_EVENT_PATH, EVENTS_PATH};

const BRAND: &str = "College Events";

#[derive(Debug, Clone, Serialize)]
pub struct NavBar {
    pub brand: &'static str,
    pub links: Vec<Link>,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            brand: BRAND,
            links: vec![
                Link::new("Home", "/"),
                Link::new("Events", EVENTS_PATH),
                Link::new("Create Event", CREATE_EVENT_PATH),
                // Login and register are navigation stubs only.
                Link::new("Login", "/login"),
                Link::new("Register", "/register"),
            ],
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub action: Link,
}

/// Static marketing content for the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub call_to_action: CallToAction,
}

impl LandingPage {
    pub fn new() -> Self {
        Self {
            hero: Hero {
                title: "Welcome to College Events",
                tagline: "Discover, Create, and Manage College Events All in One Place",
                actions: vec![
                    Link::new("Browse Events", EVENTS_PATH),
                    Link::new("Create Event", CREATE_EVENT_PATH),
                ],
            },
            features: vec![
                Feature {
                    title: "Create Events",
                    body: "Easily create and manage various types of college events with our intuitive interface.",
                },
                Feature {
                    title: "Search & Discover",
                    body: "Find events that interest you with our powerful search and filter capabilities.",
                },
                Feature {
                    title: "Manage Events",
                    body: "Edit, update, or delete events as needed. Keep your event information up to date.",
                },
            ],
            call_to_action: CallToAction {
                heading: "Ready to Get Started?",
                body: "Join our community and start managing your college events today.",
                action: Link::new("Sign Up Now", "/register"),
            },
        }
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}
