//! Inline SVG icons.
//!
//! Three families: small outline icons for dimension badges, small process
//! icons for comparison headers, and the large decorative card icons. All
//! stroke `currentColor` so the surrounding element sets the color.

use leptos::prelude::*;

use viz::catalog::IconTag;

use crate::content::frameworks::{CardIcon, ProcessIcon};

/// Badge icon for a dimension, 16px outline style.
pub fn dimension_icon(tag: IconTag) -> impl IntoView {
    match tag {
        IconTag::Database => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <ellipse cx="12" cy="5" rx="9" ry="3"/>
                <path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"/>
                <path d="M3 12c0 1.66 4 3 9 3s9-1.34 9-3"/>
            </svg>
        }
        .into_any(),
        IconTag::Network => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <rect x="9" y="2" width="6" height="6" rx="1"/>
                <rect x="2" y="16" width="6" height="6" rx="1"/>
                <rect x="16" y="16" width="6" height="6" rx="1"/>
                <path d="M5 16v-3h14v3"/>
                <path d="M12 12V8"/>
            </svg>
        }
        .into_any(),
        IconTag::Globe => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <path d="M2 12h20"/>
                <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>
            </svg>
        }
        .into_any(),
        IconTag::Wrench => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>
            </svg>
        }
        .into_any(),
        IconTag::Atom => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <circle cx="12" cy="12" r="1"/>
                <path d="M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z"/>
                <path d="M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z"/>
            </svg>
        }
        .into_any(),
        IconTag::Puzzle => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M19 10h-1V7a2 2 0 0 0-2-2h-3V4a2 2 0 1 0-4 0v1H6a2 2 0 0 0-2 2v3H3a2 2 0 1 0 0 4h1v3a2 2 0 0 0 2 2h3v1a2 2 0 1 0 4 0v-1h3a2 2 0 0 0 2-2v-3h1a2 2 0 1 0 0-4z"/>
            </svg>
        }
        .into_any(),
        IconTag::Scale => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/>
                <path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/>
                <path d="M7 21h10"/>
                <path d="M12 3v18"/>
                <path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2"/>
            </svg>
        }
        .into_any(),
        IconTag::Users => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            </svg>
        }
        .into_any(),
        IconTag::ArrowUpRight => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M7 7h10v10"/>
                <path d="M7 17 17 7"/>
            </svg>
        }
        .into_any(),
        IconTag::Sparkles => view! {
            <svg class="icon-16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M12 3l1.9 5.6L19.5 10.5l-5.6 1.9L12 18l-1.9-5.6L4.5 10.5l5.6-1.9Z"/>
                <path d="M19 3v4"/>
                <path d="M21 5h-4"/>
            </svg>
        }
        .into_any(),
    }
}

/// Small icon shown beside a comparison's process name.
pub fn process_icon(icon: ProcessIcon) -> impl IntoView {
    match icon {
        ProcessIcon::Network => view! {
            <svg class="icon-32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <circle cx="12" cy="12" r="2"/>
                <circle cx="6" cy="6" r="2"/>
                <circle cx="18" cy="6" r="2"/>
                <circle cx="6" cy="18" r="2"/>
                <circle cx="18" cy="18" r="2"/>
                <line x1="12" y1="12" x2="6" y2="6"/>
                <line x1="12" y1="12" x2="18" y2="6"/>
                <line x1="12" y1="12" x2="6" y2="18"/>
                <line x1="12" y1="12" x2="18" y2="18"/>
            </svg>
        }
        .into_any(),
        ProcessIcon::Borders => view! {
            <svg class="icon-32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <rect x="4" y="4" width="16" height="16" rx="2"/>
                <line x1="4" y1="12" x2="8" y2="12"/>
                <line x1="16" y1="12" x2="20" y2="12"/>
                <line x1="12" y1="4" x2="12" y2="8"/>
                <line x1="12" y1="16" x2="12" y2="20"/>
            </svg>
        }
        .into_any(),
        ProcessIcon::Target => view! {
            <svg class="icon-32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <circle cx="12" cy="12" r="6"/>
                <circle cx="12" cy="12" r="2"/>
            </svg>
        }
        .into_any(),
        ProcessIcon::Archive => view! {
            <svg class="icon-32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <rect x="4" y="4" width="16" height="4"/>
                <rect x="4" y="10" width="16" height="4"/>
                <rect x="4" y="16" width="16" height="4"/>
            </svg>
        }
        .into_any(),
    }
}

/// Large decorative icon in a framework card header. The expanded card
/// scales it up via CSS; the shapes themselves are static.
pub fn card_icon(icon: CardIcon) -> impl IntoView {
    match icon {
        CardIcon::Network => view! {
            <svg viewBox="0 0 100 100" aria-hidden="true">
                <circle cx="20" cy="20" r="3" fill="#9DB4C0" opacity="0.6"/>
                <circle cx="35" cy="15" r="4" fill="#9DB4C0" opacity="0.8"/>
                <circle cx="50" cy="25" r="3" fill="#9DB4C0" opacity="0.7"/>
                <circle cx="45" cy="45" r="5" fill="#D4E3E8"/>
                <circle cx="65" cy="35" r="3" fill="#9DB4C0" opacity="0.6"/>
                <circle cx="80" cy="30" r="3" fill="#9DB4C0" opacity="0.5"/>
                <circle cx="25" cy="50" r="3" fill="#9DB4C0" opacity="0.7"/>
                <circle cx="40" cy="65" r="4" fill="#9DB4C0" opacity="0.6"/>
                <circle cx="60" cy="60" r="3" fill="#9DB4C0" opacity="0.8"/>
                <circle cx="75" cy="55" r="3" fill="#9DB4C0" opacity="0.6"/>
                <g stroke="#9DB4C0" stroke-width="1" opacity="0.4">
                    <line x1="20" y1="20" x2="35" y2="15"/>
                    <line x1="35" y1="15" x2="50" y2="25"/>
                    <line x1="50" y1="25" x2="45" y2="45"/>
                    <line x1="45" y1="45" x2="65" y2="35"/>
                    <line x1="45" y1="45" x2="25" y2="50"/>
                    <line x1="45" y1="45" x2="40" y2="65"/>
                    <line x1="65" y1="35" x2="80" y2="30"/>
                    <line x1="40" y1="65" x2="60" y2="60"/>
                    <line x1="60" y1="60" x2="75" y2="55"/>
                </g>
            </svg>
        }
        .into_any(),
        CardIcon::Spiral => view! {
            <svg viewBox="0 0 100 100" aria-hidden="true">
                <path d="M 50 10 Q 75 20, 85 45 Q 87 50, 85 55 Q 75 80, 50 90 L 50 80 Q 70 72, 77 50 Q 70 28, 50 20 Z" fill="#F5A76B" opacity="0.85"/>
                <path d="M 90 50 Q 80 75, 55 85 Q 50 87, 45 85 Q 20 75, 10 50 L 20 50 Q 28 70, 50 77 Q 72 70, 80 50 Z" fill="#E89B5F" opacity="0.85"/>
                <path d="M 50 90 Q 25 80, 15 55 Q 13 50, 15 45 Q 25 20, 50 10 L 50 20 Q 30 28, 23 50 Q 30 72, 50 80 Z" fill="#D8894F" opacity="0.85"/>
                <path d="M 10 50 Q 20 25, 45 15 Q 50 13, 55 15 Q 80 25, 90 50 L 80 50 Q 72 30, 50 23 Q 28 30, 20 50 Z" fill="#C87845" opacity="0.85"/>
                <path d="M 50 25 Q 67 32, 73 50 Q 67 68, 50 75 L 50 68 Q 63 62, 66 50 Q 63 38, 50 32 Z" fill="#E89B5F" opacity="0.75"/>
                <path d="M 75 50 Q 68 67, 50 73 Q 32 67, 25 50 L 32 50 Q 38 63, 50 66 Q 62 63, 68 50 Z" fill="#D8894F" opacity="0.75"/>
                <circle cx="50" cy="50" r="18" fill="#5A3D2E" opacity="0.9"/>
            </svg>
        }
        .into_any(),
        CardIcon::Ring => view! {
            <svg viewBox="0 0 100 100" aria-hidden="true">
                <circle cx="50" cy="50" r="35" fill="none" stroke="#A67C6D" stroke-width="16" opacity="0.9"/>
                <circle cx="50" cy="50" r="35" fill="none" stroke="#5A3D35" stroke-width="16" opacity="0.3"/>
                <circle cx="50" cy="50" r="45" fill="none" stroke="#A67C6D" stroke-width="2" opacity="0.3"/>
            </svg>
        }
        .into_any(),
        CardIcon::Venn => view! {
            <svg viewBox="0 0 100 100" aria-hidden="true">
                <circle cx="40" cy="50" r="30" fill="#6B9B9E" opacity="0.6"/>
                <circle cx="60" cy="50" r="30" fill="#8BB5B8" opacity="0.6"/>
                <ellipse cx="50" cy="50" rx="20" ry="28" fill="#A8D5D8" opacity="0.8"/>
            </svg>
        }
        .into_any(),
    }
}

/// Disclosure chevron, pointing up while the panel is open.
pub fn chevron(open: bool) -> impl IntoView {
    let points = if open { "6 15 12 9 18 15" } else { "6 9 12 15 18 9" };
    view! {
        <svg class="icon-20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <polyline points=points/>
        </svg>
    }
}

pub fn info_icon() -> impl IntoView {
    view! {
        <svg class="icon-20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <circle cx="12" cy="12" r="10"/>
            <line x1="12" y1="16" x2="12" y2="12"/>
            <line x1="12" y1="8" x2="12.01" y2="8"/>
        </svg>
    }
}
