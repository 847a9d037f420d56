mod helpers;
mod host_loop;
mod replay;
mod scenarios;
