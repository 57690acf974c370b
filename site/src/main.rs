// ACADL portfolio, browser build
// Developed with 💜 by ACADL (c)2024

fn main() {
    portfolio_site::start();
}
