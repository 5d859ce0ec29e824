pub mod ledger_flows;
