//! Work experience entries for the home page timeline.

/// One stop on the experience timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    /// Year range, display only. `end` is `None` for the current role.
    pub start: u16,
    pub end: Option<u16>,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

/// Experience entries, most recent first.
#[must_use]
pub fn entries() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            role: "Independent developer",
            company: "Self-employed",
            start: 2021,
            end: None,
            summary: "Product engineering for small teams that need a senior generalist — scoping, building, and shipping end to end.",
            highlights: &[
                "Eleven client launches, zero missed deadlines",
                "Retainer maintenance for three long-term products",
            ],
        },
        ExperienceEntry {
            role: "Senior frontend engineer",
            company: "Kielwater Systems",
            start: 2018,
            end: Some(2021),
            summary: "Led the dashboard rewrite for a fleet telemetry product used by two hundred shipping operators.",
            highlights: &[
                "Cut initial load from 9s to 1.4s",
                "Mentored four juniors to mid level",
            ],
        },
        ExperienceEntry {
            role: "Full-stack developer",
            company: "Agentur Nordlicht",
            start: 2015,
            end: Some(2018),
            summary: "Agency work across two dozen client sites and shops; learned to estimate by being wrong a lot.",
            highlights: &["Built the agency's internal project starter used on every engagement after 2016"],
        },
    ]
}
