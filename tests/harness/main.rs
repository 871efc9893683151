mod helpers;
mod replay;
