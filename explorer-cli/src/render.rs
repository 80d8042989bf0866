use std::fmt::{Display, Write};

use chrono::TimeZone;
use explorer::{
    projection::{chain_color, format_deadline_in, format_timestamp_in, ChainColor},
    Panel, Phase, ViewState,
};
use types::{AdditionalData, MatchedOrder, Swap};

const ABSENT: &str = "-";

/// Draws the explorer panels as plain text.
///
/// Dates are rendered in `tz` with the offset in force at each date, so a
/// zone with daylight saving shows summer and winter times correctly.
pub struct Renderer<Tz> {
    tz: Tz,
    color: bool,
}

impl<Tz> Renderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(tz: Tz, color: bool) -> Self {
        Self { tz, color }
    }

    pub fn render(&self, view: &ViewState) -> String {
        let mut out = String::new();

        match (&view.phase, &view.record) {
            (Phase::Searching, _) => out.push_str("Searching...\n"),
            (Phase::NotFound, _) => out.push_str("No order found.\n"),
            (Phase::Displaying, Some(record)) => {
                let order = &record.result;
                let expanded = view.expanded;
                self.overview(&mut out, order, expanded.is_expanded(Panel::Overview));
                self.swap(
                    &mut out,
                    "Source Swap",
                    Panel::Source,
                    &order.source_swap,
                    expanded.is_expanded(Panel::Source),
                );
                self.swap(
                    &mut out,
                    "Destination Swap",
                    Panel::Destination,
                    &order.destination_swap,
                    expanded.is_expanded(Panel::Destination),
                );
                self.additional(
                    &mut out,
                    &order.create_order.additional_data,
                    expanded.is_expanded(Panel::Additional),
                );
            }
            _ => {}
        }

        out
    }

    fn overview(&self, out: &mut String, order: &MatchedOrder, expanded: bool) {
        let create = &order.create_order;
        heading(out, "Order Overview");
        field(out, "Order ID", create.create_id.as_deref());
        field(out, "User ID", create.user_id.as_deref());

        let source = create.source_chain.as_deref().unwrap_or_default();
        let destination = create.destination_chain.as_deref().unwrap_or_default();
        let _ = writeln!(
            out,
            "  {} {}  ->  {} {}",
            self.badge(source),
            create.source_amount.as_deref().unwrap_or(ABSENT),
            self.badge(destination),
            create.destination_amount.as_deref().unwrap_or(ABSENT),
        );

        field(
            out,
            "Source Initiator Address",
            create.initiator_source_address.as_deref(),
        );
        field(
            out,
            "Destination Redeemer Address",
            create.initiator_destination_address.as_deref(),
        );
        field(out, "Fee", create.fee.as_deref());
        field(out, "Created At", self.timestamp(order.created_at.as_deref()).as_deref());
        field(out, "Secret Hash", create.secret_hash.as_deref());

        if !expanded {
            more(out, 8, Panel::Overview);
            return;
        }
        field(out, "Block Number", create.block_number.as_deref());
        field(out, "Nonce", create.nonce.as_deref());
        field(out, "Source Asset", create.source_asset.as_deref());
        field(out, "Destination Asset", create.destination_asset.as_deref());
        field(
            out,
            "Initiator Source Address",
            create.initiator_source_address.as_deref(),
        );
        field(
            out,
            "Initiator Destination Address",
            create.initiator_destination_address.as_deref(),
        );
        field(out, "Timelock", number(create.timelock).as_deref());
        field(
            out,
            "Min Destination Confirmations",
            number(create.min_destination_confirmations).as_deref(),
        );
    }

    fn swap(&self, out: &mut String, title: &str, panel: Panel, swap: &Swap, expanded: bool) {
        let chain = swap.chain_name();
        heading(out, &format!("{title} ({chain})"));
        let _ = writeln!(
            out,
            "  {} {}",
            swap.amount.as_deref().unwrap_or(ABSENT),
            self.badge(&chain.to_uppercase()),
        );

        field(out, "Swap id", swap.swap_id.as_deref());
        let filled = swap
            .filled_amount
            .as_deref()
            .filter(|amount| !amount.is_empty())
            .unwrap_or("No filled amount");
        field(out, "Price", Some(filled));
        field(out, "Initiator", swap.initiator.as_deref());
        field(out, "Initiate Tx", swap.initiate_tx_hash.as_deref());
        field(out, "Redeemer", swap.redeemer.as_deref());
        field(out, "Redeem Tx", swap.redeem_tx_hash.as_deref());

        if !expanded {
            more(out, 11, panel);
            return;
        }
        out.push_str("  Transaction Details\n");
        field(out, "Asset", swap.asset.as_deref());
        field(out, "Amount", swap.amount.as_deref());
        field(out, "Filled Amount", swap.filled_amount.as_deref());
        field(out, "Timelock", number(swap.timelock).as_deref());
        field(
            out,
            "Required Confirmations",
            number(swap.required_confirmations).as_deref(),
        );
        field(
            out,
            "Current Confirmations",
            number(swap.current_confirmations).as_deref(),
        );
        field(out, "Secret", swap.secret.as_deref());
        field(out, "Initiate Block", swap.initiate_block_number.as_deref());
        field(out, "Redeem Block", swap.redeem_block_number.as_deref());
        field(
            out,
            "Created At",
            self.timestamp(swap.created_at.as_deref()).as_deref(),
        );
        field(
            out,
            "Last Updated",
            self.timestamp(swap.updated_at.as_deref()).as_deref(),
        );
    }

    fn additional(&self, out: &mut String, data: &AdditionalData, expanded: bool) {
        heading(out, "Additional Information");
        field(out, "Strategy ID", data.strategy_id.as_deref());
        field(
            out,
            "Bitcoin Recipient",
            data.bitcoin_optional_recipient.as_deref(),
        );
        field(out, "Blacklist Status", Some(data.blacklist_status()));
        field(out, "Transaction Hash", data.tx_hash.as_deref());

        if !expanded {
            more(out, 4, Panel::Additional);
            return;
        }
        out.push_str("  Extended Metadata\n");
        field(
            out,
            "Input Token Price",
            data.input_token_price.map(|p| p.to_string()).as_deref(),
        );
        field(
            out,
            "Output Token Price",
            data.output_token_price.map(|p| p.to_string()).as_deref(),
        );
        field(
            out,
            "Deadline",
            data.deadline
                .map(|secs| format_deadline_in(secs, &self.tz))
                .as_deref(),
        );
        field(out, "Signature", data.sig.as_deref());
    }

    fn timestamp(&self, value: Option<&str>) -> Option<String> {
        value.map(|value| format_timestamp_in(value, &self.tz))
    }

    fn badge(&self, chain: &str) -> String {
        let label = if chain.is_empty() { ABSENT } else { chain };
        self.paint(label, chain_color(chain))
    }

    fn paint(&self, text: &str, color: ChainColor) -> String {
        if self.color {
            format!("\x1b[{}m{text}\x1b[0m", color.ansi())
        } else {
            format!("[{text}]")
        }
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {title}");
}

fn field(out: &mut String, label: &str, value: Option<&str>) {
    let _ = writeln!(out, "  {label:<30} {}", value.unwrap_or(ABSENT));
}

fn more(out: &mut String, count: usize, panel: Panel) {
    let name = match panel {
        Panel::Overview => "overview",
        Panel::Source => "source",
        Panel::Destination => "destination",
        Panel::Additional => "additional",
    };
    let _ = writeln!(out, "  ({count} more, `:more {name}` to expand)");
}

fn number(value: Option<u64>) -> Option<String> {
    value.map(|value| value.to_string())
}
