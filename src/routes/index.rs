use acceleron_inquiry::{Inquiry, LeadForm, SubmitStatus};
use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Host;
use serde::Deserialize;

use crate::{
    content::{self, Card, NavLink},
    error::AppError,
    routes::AppState,
    seo::{self, PageMeta},
};

#[derive(Template)]
#[template(path = "index.html")]
struct LandingTemplate {
    meta: PageMeta,
    jsonld: String,
    site_name: &'static str,
    hero_title: &'static str,
    hero_lead: &'static str,
    about_vastu: &'static str,
    nav: &'static [NavLink],
    hero_points: &'static [&'static str],
    services: &'static [Card],
    channels: &'static [Card],
    core_principles: &'static [&'static str],
    why_consultant: &'static [&'static str],
    contact_email: String,
    contact_phone: String,
    status: SubmitStatus,
    values: Inquiry,
    year: i32,
}

impl LandingTemplate {
    fn new(state: &AppState, canonical: &str, status: SubmitStatus, values: Inquiry) -> Self {
        Self {
            meta: seo::landing_meta(canonical),
            jsonld: seo::professional_service_jsonld(canonical),
            site_name: content::SITE_NAME,
            hero_title: content::HERO_TITLE,
            hero_lead: content::HERO_LEAD,
            about_vastu: content::ABOUT_VASTU,
            nav: content::NAV,
            hero_points: content::HERO_POINTS,
            services: content::SERVICES,
            channels: content::CHANNELS,
            core_principles: content::CORE_PRINCIPLES,
            why_consultant: content::WHY_CONSULTANT,
            contact_email: state.config.site.contact_email.clone(),
            contact_phone: state.config.site.contact_phone.clone(),
            status,
            values,
            year: time::OffsetDateTime::now_utc().year(),
        }
    }
}

/// GET / - the marketing page with a fresh lead form.
pub async fn page(State(state): State<AppState>, Host(host): Host) -> Result<Response, AppError> {
    let canonical = seo::canonical_url(&state.config.site.base_url, &host);
    let template = LandingTemplate::new(&state, &canonical, SubmitStatus::Idle, Inquiry::default());

    Ok(Html(template.render()?).into_response())
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub issue: String,
}

/// POST /inquiry - drive one submission attempt and re-render the page
/// with the outcome banner. Success clears the fields; failure keeps them.
pub async fn action(
    State(state): State<AppState>,
    Host(host): Host,
    Form(input): Form<ActionInput>,
) -> Result<Response, AppError> {
    let mut form = LeadForm::with_inquiry(Inquiry {
        name: input.name,
        contact: input.contact,
        email: input.email,
        issue: input.issue,
    });

    let status = form.submit(state.intake.as_ref()).await;

    let canonical = seo::canonical_url(&state.config.site.base_url, &host);
    let template = LandingTemplate::new(&state, &canonical, status, form.inquiry().clone());
    let html = Html(template.render()?);

    // A blocked submission means a required field was missing. The browser
    // normally stops those before the request, so answer 422 for clients
    // that bypassed it.
    Ok(if status == SubmitStatus::Idle {
        (StatusCode::UNPROCESSABLE_ENTITY, html).into_response()
    } else {
        html.into_response()
    })
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

pub async fn fallback() -> Result<Response, AppError> {
    Ok((StatusCode::NOT_FOUND, Html(NotFoundTemplate.render()?)).into_response())
}
