use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::balance::{compute_balance_from_expenses, people_from_expenses};
use crate::error::ApiError;
use crate::exchange::get_exchanges_from_balance;
use crate::schemas::{ApiResponse, Expense, ExpenseForm};
use crate::store::{parse_expense_id, ExpenseStore};
use crate::validation::validate_expense;

type Store = web::Data<dyn ExpenseStore>;

#[get("/")]
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::message("Welcome to the Split Expense App"))
}

#[post("/expenses")]
async fn add_expense(
    store: Store,
    form: web::Json<ExpenseForm>,
) -> Result<HttpResponse, ApiError> {
    let expense = validate_expense(form.into_inner())?;
    let stored = store.insert(expense).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(stored, "Expense added successfully")))
}

#[get("/expenses")]
async fn get_expenses(store: Store) -> Result<HttpResponse, ApiError> {
    let expenses = store.list().await?;
    let message = format!("{} expense(s) found", expenses.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(expenses, message)))
}

#[put("/expenses/{id}")]
async fn update_expense(
    store: Store,
    id: web::Path<String>,
    form: web::Json<ExpenseForm>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_expense_id(&id)?;
    let expense = validate_expense(form.into_inner())?;
    if !store.replace(id, expense).await? {
        return Err(ApiError::NotFound);
    }
    Ok(HttpResponse::Ok().json(ApiResponse::message("Expense updated successfully")))
}

#[delete("/expenses/{id}")]
async fn delete_expense(store: Store, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id = parse_expense_id(&id)?;
    if !store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(HttpResponse::Ok().json(ApiResponse::message("Expense deleted successfully")))
}

async fn all_expenses(store: &Store) -> Result<Vec<Expense>, ApiError> {
    Ok(store
        .list()
        .await?
        .into_iter()
        .map(|stored| stored.expense)
        .collect())
}

#[get("/people")]
async fn get_people(store: Store) -> Result<HttpResponse, ApiError> {
    let people = people_from_expenses(&all_expenses(&store).await?);
    let message = format!("{} person(s) found", people.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(people, message)))
}

#[get("/balances")]
async fn get_balances(store: Store) -> Result<HttpResponse, ApiError> {
    let balances = compute_balance_from_expenses(&all_expenses(&store).await?);
    let message = if balances.is_empty() {
        "No expenses found"
    } else {
        "Net balances for each person"
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok(balances, message)))
}

#[get("/settlements")]
async fn get_settlements(store: Store) -> Result<HttpResponse, ApiError> {
    let balances = compute_balance_from_expenses(&all_expenses(&store).await?);
    let exchanges = get_exchanges_from_balance(&balances);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        exchanges,
        "Simplified settlement transactions",
    )))
}

/// Registers every endpoint. The store itself is expected as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidExpense(err.to_string()).into()),
    )
    .service(welcome)
    .service(add_expense)
    .service(get_expenses)
    .service(update_expense)
    .service(delete_expense)
    .service(get_people)
    .service(get_balances)
    .service(get_settlements);
}
