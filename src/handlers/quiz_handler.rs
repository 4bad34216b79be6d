use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, SubmitAnswersRequest, UpdateQuizRequest},
        response::{MessageResponse, QuizMutationResponse, QuizView, SubmissionResponse},
    },
};

#[get("/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    let views: Vec<QuizView> = quizzes.into_iter().map(QuizView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizView::from(quiz)))
}

#[post("/quiz/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAnswersRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .grading_service
        .submit(&id, &auth.0.sub, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SubmissionResponse {
        message: "Quiz submitted successfully".to_string(),
        score: result.score,
        total: result.total,
    }))
}

#[post("/admin/quiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let quiz = state
        .quiz_service
        .create_quiz(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Created().json(QuizMutationResponse {
        message: "Quiz created successfully".to_string(),
        quiz: quiz.into(),
    }))
}

#[put("/admin/quiz/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let quiz = state
        .quiz_service
        .update_quiz(&id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(QuizMutationResponse {
        message: "Quiz updated successfully".to_string(),
        quiz: quiz.into(),
    }))
}

#[delete("/admin/quiz/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.quiz_service.delete_quiz(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Quiz and associated results deleted successfully",
    )))
}
