// roster-client/examples/roster_console.rs
// 控制台示例：登录、查看列表、可选地添加员工

use std::sync::Arc;

use roster_client::{
    AddView, ClientConfig, FileStore, IndexView, ListView, LoginView, Navigator, PageContext,
    SessionStore, TracingNavigator, UpdateView,
};
use shared::render::EMPLOYEE_HEADERS;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_client=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password> [add <name> <gender> <age> <department> <position> <phone> <email> <hire_date> | update <id> <field> <value>]", args[0]);
        println!("  Example: {} admin 123456 update 3 phone 13900000000", args[0]);
        println!("  Example: {} admin 123456", args[0]);
        println!("  ROSTER_BASE_URL overrides the backend address");
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Using backend");

    let store: Arc<dyn SessionStore> = Arc::new(FileStore::new(config.session_path.clone()));
    let navigator: Arc<dyn Navigator> = Arc::new(TracingNavigator);
    let ctx = PageContext::connect(config, store, navigator)?;

    // 登录
    let mut login = LoginView::new(ctx.clone());
    login.submit(&args[1], &args[2]).await;
    if let Some(error) = login.error() {
        anyhow::bail!("login failed: {error}");
    }

    let mut index = IndexView::new(ctx.clone());
    if !index.enter() {
        anyhow::bail!("session was not stored");
    }
    println!("Welcome, {}", index.username().unwrap_or_default());

    // 添加员工
    if args.get(3).map(String::as_str) == Some("add") {
        let fields = &args[4..];
        if fields.len() < 8 {
            anyhow::bail!("add needs 8 fields, got {}", fields.len());
        }
        let mut add = AddView::new(ctx.clone());
        if add.enter() {
            add.form.name = fields[0].clone();
            add.form.gender = fields[1].clone();
            add.form.age = fields[2].clone();
            add.form.department = fields[3].clone();
            add.form.position = fields[4].clone();
            add.form.phone = fields[5].clone();
            add.form.email = fields[6].clone();
            add.form.hire_date = fields[7].clone();
            add.submit().await;
            if let Some(feedback) = add.feedback() {
                println!("{}", feedback.text);
            }
            if let Some(redirect) = add.take_pending_redirect() {
                redirect.await?;
            }
        }
    }

    // 修改员工
    if args.get(3).map(String::as_str) == Some("update") {
        let [id, field, value] = &args[4..] else {
            anyhow::bail!("update needs <id> <field> <value>");
        };
        let mut update = UpdateView::new(ctx.clone());
        if update.enter().await {
            update.select(id).await;
            if !update.form_visible() {
                anyhow::bail!("employee {id} could not be loaded");
            }
            let slot = match field.as_str() {
                "name" => &mut update.form.name,
                "gender" => &mut update.form.gender,
                "age" => &mut update.form.age,
                "department" => &mut update.form.department,
                "position" => &mut update.form.position,
                "phone" => &mut update.form.phone,
                "email" => &mut update.form.email,
                "hire_date" => &mut update.form.hire_date,
                other => anyhow::bail!("unknown field: {other}"),
            };
            *slot = value.clone();
            update.submit().await;
            if let Some(feedback) = update.feedback() {
                println!("{}", feedback.text);
            }
            if let Some(redirect) = update.take_pending_redirect() {
                redirect.await?;
            }
        }
    }

    // 员工列表
    let mut list = ListView::new(ctx.clone());
    if list.load().await {
        println!("{}", EMPLOYEE_HEADERS.join(" | "));
        match list.table().placeholder() {
            Some(placeholder) => println!("{}", placeholder.text),
            None => {
                for row in list.table().rows() {
                    println!("{}", row.cells.join(" | "));
                }
            }
        }
    }

    Ok(())
}
