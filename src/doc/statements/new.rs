/*!
# `NEW`

## Purpose
Erases the program. Variables keep their values.

*/
