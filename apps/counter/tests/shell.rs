//! End-to-end counter sessions driven through the line shell.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use counter::error::ErrorCode;
use counter::shell::{Reply, Shell};
use counter::state::{AssistantState, DeliveryTicker, SessionState};
use officine_assistant::prompts::NOT_CONFIGURED_MESSAGE;
use officine_assistant::MockGenerator;

fn shell_with(generator: Arc<MockGenerator>) -> Shell {
    Shell::new(
        SessionState::with_fixtures(Utc::now()),
        AssistantState::with_generator(generator),
        DeliveryTicker::start(Duration::from_millis(100)),
    )
}

fn shell() -> Shell {
    shell_with(Arc::new(MockGenerator::unconfigured()))
}

async fn json(shell: &Shell, line: &str) -> Value {
    match shell.handle_line(line).await {
        Reply::Output(text) => serde_json::from_str(&text).unwrap(),
        other => panic!("{line}: unexpected reply {other:?}"),
    }
}

async fn error_code(shell: &Shell, line: &str) -> ErrorCode {
    match shell.handle_line(line).await {
        Reply::Error(e) => e.code,
        other => panic!("{line}: expected an error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_full_checkout_session() {
    let shell = shell();

    json(&shell, "add 1").await;
    json(&shell, "add 1").await;
    let cart = json(&shell, "add 2").await;
    assert_eq!(cart["totals"]["total"], 1900);
    assert_eq!(cart["state"], "BUILDING");

    let cart = json(&shell, "checkout").await;
    assert_eq!(cart["state"], "PAYING");

    let sale = json(&shell, "pay cash").await;
    assert_eq!(sale["total"], 1900);
    assert_eq!(sale["paymentMethod"], "CASH");
    assert_eq!(sale["items"].as_array().unwrap().len(), 2);

    let stock = json(&shell, "search Paracétamol").await;
    assert_eq!(stock[0]["stock"], 318);

    let sales = json(&shell, "sales").await;
    assert_eq!(sales.as_array().unwrap().len(), 3);

    let dashboard = json(&shell, "dashboard").await;
    assert_eq!(dashboard["todaysSalesCount"], 2);
    assert_eq!(dashboard["dailyRevenue"], 4500 + 1900);
}

#[tokio::test]
async fn test_pos_state_errors() {
    let shell = shell();

    assert_eq!(error_code(&shell, "checkout").await, ErrorCode::CartError);
    assert_eq!(error_code(&shell, "pay card").await, ErrorCode::BusinessLogic);
    assert_eq!(error_code(&shell, "add 999").await, ErrorCode::NotFound);
    assert_eq!(error_code(&shell, "pay bitcoin").await, ErrorCode::InvalidCommand);
    assert_eq!(error_code(&shell, "frobnicate").await, ErrorCode::InvalidCommand);
}

#[tokio::test]
async fn test_medicine_form() {
    let shell = shell();

    assert_eq!(
        error_code(&shell, "add-medicine --name Ibuprofène").await,
        ErrorCode::ValidationError
    );

    let medicine = json(
        &shell,
        r#"add-medicine --name Ibuprofène --category "Anti-inflammatoire" --price 900 --stock 25 --form capsule"#,
    )
    .await;
    assert_eq!(medicine["form"], "CAPSULE");
    assert_eq!(medicine["minStock"], 10);
    let id = medicine["id"].as_str().unwrap().to_string();

    let categories = json(&shell, "categories").await;
    assert_eq!(categories.as_array().unwrap().last().unwrap(), "Anti-inflammatoire");

    assert_eq!(json(&shell, &format!("edit-medicine {id} --stock 3")).await, true);
    let low = json(&shell, "low-stock").await;
    assert!(low.as_array().unwrap().iter().any(|m| m["id"] == id.as_str()));

    assert_eq!(json(&shell, &format!("delete-medicine {id}")).await, true);
    assert_eq!(json(&shell, &format!("delete-medicine {id}")).await, false);
    assert_eq!(json(&shell, "stock").await.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_huge_price_never_overflows_totals() {
    let shell = shell();

    let medicine = json(
        &shell,
        &format!("add-medicine --name Big --price {} --stock 5", i64::MAX),
    )
    .await;
    let id = medicine["id"].as_str().unwrap().to_string();

    json(&shell, &format!("add {id}")).await;
    let cart = json(&shell, &format!("add {id}")).await;
    assert_eq!(cart["items"][0]["quantity"], 1);
    assert_eq!(cart["totals"]["total"], i64::MAX);

    let cart = json(&shell, &format!("inc {id}")).await;
    assert_eq!(cart["items"][0]["quantity"], 1);
    let cart = json(&shell, "add 1").await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);

    json(&shell, "checkout").await;
    let sale = json(&shell, "pay cash").await;
    assert_eq!(sale["total"], i64::MAX);

    // Revenue sums saturate instead of wrapping negative
    let dashboard = json(&shell, "dashboard").await;
    assert_eq!(dashboard["dailyRevenue"], i64::MAX);
}

#[tokio::test]
async fn test_registries() {
    let shell = shell();

    let card = json(
        &shell,
        "add-client --first-name Ama --last-name Kpodar --sex F --height 160 --weight 64 --allergies Aspirine,Iode",
    )
    .await;
    assert_eq!(card["bmi"], "25.0");
    assert_eq!(card["allergies"].as_array().unwrap().len(), 2);

    let found = json(&shell, "clients kpodar").await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(error_code(&shell, "add-client --first-name Ama").await, ErrorCode::ValidationError);

    let supplier = json(&shell, r#"add-supplier --name "Ubipharm Togo" --type laboratory"#).await;
    assert_eq!(supplier["type"], "LABORATORY");
    let delivery = json(&shell, "delivery").await;
    assert_eq!(delivery["suppliers"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_prescription_board() {
    let shell = shell();

    let rx = json(
        &shell,
        r#"add-prescription --patient "Ama Kpodar" --doctor "Dr. Tchala" --medications "Coartem, Paracétamol""#,
    )
    .await;
    let id = rx["id"].as_str().unwrap().to_string();
    assert_eq!(rx["status"], "PENDING");

    let board = json(&shell, "prescriptions").await;
    assert_eq!(board[0]["prescriptions"][0]["id"], id.as_str());

    for expected in ["PREPARING", "READY", "COMPLETED"] {
        let step = json(&shell, &format!("advance {id}")).await;
        assert_eq!(step["status"], expected);
    }
    let step = json(&shell, &format!("advance {id}")).await;
    assert_eq!(step["advanced"], false);
}

#[tokio::test]
async fn test_settings_and_target() {
    let shell = shell();

    let settings = json(&shell, "set-target 50000").await;
    assert_eq!(settings["dailyRevenueTarget"], 50000);
    let settings = json(&shell, "set-target -10").await;
    assert_eq!(settings["dailyRevenueTarget"], -10);
    assert_eq!(json(&shell, "dashboard").await["progressPercentage"], 0);

    let settings = json(&shell, r#"settings --phone "+228 22 21 00 00""#).await;
    assert_eq!(settings["phone"], "+228 22 21 00 00");
    assert_eq!(json(&shell, "settings").await["name"], "Pharmacie de l'Espoir");
}

#[tokio::test]
async fn test_ask() {
    let shell = shell();
    assert_eq!(shell.handle_line("ask").await, Reply::Empty);
    assert_eq!(
        shell.handle_line("ask Analyse mes ventes").await,
        Reply::Output(NOT_CONFIGURED_MESSAGE.to_string())
    );

    let mock = Arc::new(MockGenerator::replying("## Stock\n- Bronchokod à commander"));
    let shell = shell_with(mock.clone());
    assert_eq!(
        shell.handle_line("ask Quels produits commander ?").await,
        Reply::Output("Stock\n• Bronchokod à commander".to_string())
    );
    assert!(mock.prompts()[0].contains(r#""Quels produits commander ?""#));
}

#[tokio::test]
async fn test_help_blank_and_quit() {
    let shell = shell();
    assert!(matches!(shell.handle_line("help").await, Reply::Help(text) if text.contains("add-medicine")));
    assert_eq!(shell.handle_line("   ").await, Reply::Empty);
    assert_eq!(shell.handle_line("quit").await, Reply::Quit);
    assert_eq!(shell.handle_line("exit").await, Reply::Quit);
}
