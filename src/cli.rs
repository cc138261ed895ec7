use clap::{Args, Parser, Subcommand};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::{
    errors::OrderError,
    orders::{Order, OrderView},
};

/// Simple CLI to price a single order
#[derive(Parser, Debug)]
#[command(name = "order-pricing")]
#[command(version, about = "Builds an order and computes its discounted price")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the calculated price (item price minus discount)
    #[command(allow_negative_numbers = true)]
    Price(OrderArgs),

    /// Print the order itself
    #[command(allow_negative_numbers = true)]
    Show {
        #[command(flatten)]
        order: OrderArgs,

        /// Emit JSON (including the calculated price) instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Name of the purchased item
    item_name: String,

    /// Price before discount
    item_price: i32,

    /// Amount subtracted from the price
    discount_price: i32,

    /// Order id, an integer or `null`
    #[arg(long, default_value = "null")]
    id: IdArg,
}

/// Command line form of an optional order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IdArg(Option<i64>);

impl FromStr for IdArg {
    type Err = OrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("null") {
            return Ok(IdArg(None));
        }
        s.parse::<i64>()
            .map(|id| IdArg(Some(id)))
            .map_err(|_| OrderError::InvalidId(s.to_string()))
    }
}

impl OrderArgs {
    fn into_order(self) -> Order {
        let order = Order::new(
            self.id.0,
            self.item_name,
            self.item_price,
            self.discount_price,
        );
        debug!("built order: {}", order);
        order
    }
}

fn handle_price(order: &Order) -> String {
    let price = order.calculate_price();
    if price < 0 {
        warn!(
            item_price = order.item_price(),
            discount_price = order.discount_price(),
            "discount exceeds item price"
        );
    }
    info!(price, "calculated price");
    price.to_string()
}

fn handle_show(order: &Order, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(&OrderView::from(order))?)
    } else {
        Ok(order.to_string())
    }
}

fn execute(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Commands::Price(args) => Ok(handle_price(&args.into_order())),
        Commands::Show { order, json } => handle_show(&order.into_order(), json),
    }
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let out = execute(cli)?;
    println!("{}", out);
    Ok(())
}
