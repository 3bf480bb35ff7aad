use axum::middleware::from_fn;
use axum::routing::{delete, post, put};
use axum::{routing::get, Router};

use super::handlers::{
    applications, candidates, educations, jobs, memberships, probes, recruiters, search, skills,
    users, work_experiences,
};
use super::middlewares::authn;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    // everything behind the cookie-token guard
    let protected = Router::new()
        .route("/user/logout", post(users::logout))
        .route("/user/update", put(users::update))
        .route("/user/delete", post(users::delete))
        .route("/candidate/get-profile", get(candidates::get_profile))
        .route("/candidate/update", put(candidates::update))
        .route("/recruiter/get-profile", get(recruiters::get_profile))
        .route("/recruiter/update", put(recruiters::update))
        .route(
            "/recruiter/get-candidate-profiles",
            get(recruiters::get_candidate_profiles),
        )
        .route("/job/get-posted-jobs", get(jobs::get_posted))
        .route("/job/post", post(jobs::create))
        .route("/job/update", put(jobs::update))
        .route("/job/delete", delete(jobs::delete))
        .route("/job/get-saved-jobs", get(jobs::get_saved))
        .route("/job/post-saved-job", post(jobs::save_job))
        .route("/job/delete-saved-job", delete(jobs::delete_saved))
        .route("/membership/post", post(memberships::add))
        .route("/membership/get", get(memberships::get))
        .route("/membership/update", put(memberships::update))
        .route("/membership/delete", delete(memberships::delete))
        .route("/skill/post-list", post(skills::add_list))
        .route("/skill/post-one", post(skills::add_one))
        .route("/skill/get", get(skills::get))
        .route("/skill/delete", delete(skills::delete))
        .route("/skill/update", put(skills::update))
        .route("/education/get-all", get(educations::get_all))
        .route("/education/post-one", post(educations::add_one))
        .route("/education/post-batch", post(educations::add_batch))
        .route("/education/update", put(educations::update))
        .route("/education/delete", delete(educations::delete))
        .route(
            "/work-experience/get-all",
            get(work_experiences::get_all),
        )
        .route(
            "/work-experience/post-one",
            post(work_experiences::add_one),
        )
        .route(
            "/work-experience/post-batch",
            post(work_experiences::add_batch),
        )
        .route("/work-experience/update", put(work_experiences::update))
        .route("/work-experience/delete", delete(work_experiences::delete))
        .route("/application/get-all", get(applications::get_all))
        .route(
            "/application/get-all-by-job-id",
            get(applications::get_all_by_job_id),
        )
        .route("/application/post-one", post(applications::add))
        .route("/application/update", put(applications::update))
        .route("/application/delete", delete(applications::delete))
        .route("/search/skills", get(search::skills))
        .layer(from_fn(authn::authenticate));

    // open routes; /job/get-one upgrades itself when a valid owner cookie
    // happens to be present
    let public = Router::new()
        .route("/user/get-all-users", get(users::get_all))
        .route("/user/register", post(users::register))
        .route("/user/login", post(users::login))
        .route("/user/send-recovery-url", get(users::send_recovery_url))
        .route("/user/reset-password", post(users::reset_password))
        .route("/job/get-all", get(jobs::get_all))
        .route("/job/get-ten", get(jobs::get_ten))
        .route("/job/get-one", get(jobs::get_one))
        .route(
            "/search/title-and-location",
            get(search::title_and_location),
        )
        .route("/healthz", get(probes::healthz))
        .route("/livez", get(probes::livez));

    Router::new().merge(public).merge(protected).with_state(state)
}
