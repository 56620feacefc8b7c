mod bookmark_bar;
mod modals;
mod panes;
mod status;
