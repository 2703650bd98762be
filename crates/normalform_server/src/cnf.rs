use actix_web::{error, web, HttpResponse, Result};
use normalform::{clausify, parse_prop_formula, CNFStrategy, ClauseSet, LogicNode};
use serde::{Deserialize, Serialize};

use crate::ParseForm;

/// Strategy selection accepted by `/convert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
enum Mode {
    #[default]
    #[serde(rename = "EQUIVALENT")]
    Equivalent,
    #[serde(rename = "TSEYTIN")]
    Tseytin,
    #[serde(rename = "BOTH")]
    Both,
}

#[derive(Debug, Default, Deserialize)]
struct ConvertParams {
    #[serde(default)]
    strategy: Mode,
}

#[derive(Debug, Serialize)]
struct ParseResponse {
    parsed: String,
    variables: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ConversionResponse {
    strategy: CNFStrategy,
    parsed: String,
    clauses: ClauseSet,
    display: String,
    count: usize,
}

fn parse_form(formula: &str) -> Result<LogicNode> {
    parse_prop_formula(formula).map_err(error::ErrorBadRequest)
}

fn run(parsed: &LogicNode, strategy: CNFStrategy) -> ConversionResponse {
    let clauses = clausify(parsed, strategy);

    ConversionResponse {
        strategy,
        parsed: parsed.to_string(),
        display: clauses.to_string(),
        count: clauses.size(),
        clauses,
    }
}

fn read_params(params: Option<String>) -> Result<ConvertParams> {
    match params {
        Some(p) if !p.trim().is_empty() => {
            serde_json::from_str(&p).map_err(error::ErrorBadRequest)
        }
        _ => Ok(ConvertParams::default()),
    }
}

pub(crate) async fn parse(form: web::Form<ParseForm>) -> Result<HttpResponse> {
    let ParseForm { formula, .. } = form.0;

    let node = parse_form(&formula)?;
    log::debug!("Parsed: {}", node);

    Ok(HttpResponse::Ok().json(ParseResponse {
        parsed: node.to_string(),
        variables: node.variables(),
    }))
}

pub(crate) async fn equivalent(form: web::Form<ParseForm>) -> Result<HttpResponse> {
    let res = run(&parse_form(&form.formula)?, CNFStrategy::Equivalent);
    Ok(HttpResponse::Ok().json(res))
}

pub(crate) async fn tseytin(form: web::Form<ParseForm>) -> Result<HttpResponse> {
    let res = run(&parse_form(&form.formula)?, CNFStrategy::Tseytin);
    Ok(HttpResponse::Ok().json(res))
}

pub(crate) async fn convert(form: web::Form<ParseForm>) -> Result<HttpResponse> {
    let ParseForm { formula, params } = form.0;
    let params = read_params(params)?;
    let node = parse_form(&formula)?;

    let res = match params.strategy {
        Mode::Equivalent => vec![run(&node, CNFStrategy::Equivalent)],
        Mode::Tseytin => vec![run(&node, CNFStrategy::Tseytin)],
        Mode::Both => vec![
            run(&node, CNFStrategy::Equivalent),
            run(&node, CNFStrategy::Tseytin),
        ],
    };

    Ok(HttpResponse::Ok().json(res))
}
