mod config_loading;
mod report_chain;
